//! Whole-loop properties checked over random seeds and input scripts

use proptest::prelude::*;

use smile_dash::consts::*;
use smile_dash::sim::{
    Direction, FrameOutcome, GamePhase, GameState, Headless, InputEvent, InputQueue, Player,
    Viewport, tick,
};
use smile_dash::tuning::Tuning;

fn new_state(seed: u64, width: f32, height: f32) -> GameState {
    GameState::new(seed, Viewport::new(width, height).unwrap(), Tuning::default()).unwrap()
}

fn input_strategy() -> impl Strategy<Value = Option<InputEvent>> {
    prop_oneof![
        6 => Just(None),
        2 => Just(Some(InputEvent::Jump)),
        1 => Just(Some(InputEvent::MoveLateral(Direction::Left))),
        1 => Just(Some(InputEvent::MoveLateral(Direction::Right))),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn frame_and_score_are_monotone(
        seed in any::<u64>(),
        script in prop::collection::vec(input_strategy(), 1..600),
    ) {
        let mut state = new_state(seed, 1280.0, 720.0);
        let mut inputs = InputQueue::new();
        let mut game_overs = 0;

        for input in script {
            if let Some(event) = input {
                inputs.push(event);
            }
            let frame = state.frame;
            let score = state.score;
            let gap = state.gap_size;
            let was_running = state.running();

            let outcome = tick(&mut state, &mut inputs, &mut Headless);

            if was_running {
                prop_assert_eq!(state.frame, frame + 1);
            } else {
                prop_assert_eq!(state.frame, frame);
                prop_assert_eq!(outcome, FrameOutcome::Halted);
            }
            prop_assert!(state.score >= score);
            prop_assert!(state.gap_size <= gap);
            prop_assert!(state.gap_size >= GAP_MIN);
            if was_running && !state.running() {
                game_overs += 1;
            }
        }

        prop_assert!(game_overs <= 1);
    }

    #[test]
    fn nothing_lingers_off_screen(
        seed in any::<u64>(),
        frames in 1u64..900,
    ) {
        let mut state = new_state(seed, 1280.0, 720.0);
        let mut inputs = InputQueue::new();

        for _ in 0..frames {
            if tick(&mut state, &mut inputs, &mut Headless) == FrameOutcome::Halted {
                break;
            }
            for target in &state.targets {
                prop_assert!(target.pos.x + target.size >= 0.0);
            }
            for obs in &state.obstacles {
                prop_assert!(obs.pos.x + obs.width >= 0.0);
            }
        }
    }

    #[test]
    fn obstacles_stay_paired(
        seed in any::<u64>(),
        height in 200.0f32..1200.0,
        frames in 1u64..1200,
    ) {
        let mut state = new_state(seed, 1000.0, height);
        let mut inputs = InputQueue::new();

        for _ in 0..frames {
            if tick(&mut state, &mut inputs, &mut Headless) == FrameOutcome::Halted {
                break;
            }
        }

        for pair in state.obstacles.chunks(2) {
            prop_assert_eq!(pair.len(), 2);
            prop_assert_eq!(pair[0].pair_id, pair[1].pair_id);
            prop_assert_eq!(pair[0].spawn_frame, pair[1].spawn_frame);
            prop_assert_eq!(pair[0].pos.x, pair[1].pos.x);
            prop_assert!(pair[0].height >= 0.0);
            prop_assert!(pair[1].height >= 0.0);
        }
    }

    #[test]
    fn restart_always_yields_initial_world(
        seed in any::<u64>(),
        frames in 0u64..800,
    ) {
        let mut state = new_state(seed, 1280.0, 720.0);
        let mut inputs = InputQueue::new();
        for i in 0..frames {
            if i % 20 == 0 {
                inputs.push(InputEvent::Jump);
            }
            tick(&mut state, &mut inputs, &mut Headless);
        }

        state.restart();

        prop_assert_eq!(state.phase, GamePhase::Running);
        prop_assert_eq!(state.frame, 0);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.gap_size, GAP_INITIAL);
        prop_assert!(state.targets.is_empty());
        prop_assert!(state.obstacles.is_empty());
        prop_assert_eq!(&state.player, &Player::spawn(state.viewport, state.tuning()));
    }
}

#[test]
fn gap_reaches_floor_after_ninety_cycles() {
    let tuning = Tuning {
        target_interval: 1_000_000,
        ..Default::default()
    };
    let mut state = GameState::new(77, Viewport::new(1280.0, 720.0).unwrap(), tuning).unwrap();

    let mut cycles = 0;
    for frame in 0..(91 * OBSTACLE_SPAWN_INTERVAL) {
        state.frame = frame;
        let before = state.obstacles.len();
        smile_dash::sim::maybe_spawn_obstacle_pair(&mut state);
        if state.obstacles.len() > before {
            cycles += 1;
            if cycles == 90 {
                assert_eq!(state.gap_size, GAP_INITIAL - 90.0 * GAP_STEP);
                assert_eq!(state.gap_size, GAP_MIN);
            }
        }
    }

    assert_eq!(cycles, 91);
    assert_eq!(state.gap_size, GAP_MIN);
}

#[test]
fn terminal_collision_stops_the_loop_until_restart() {
    let mut state = new_state(3, 800.0, 600.0);
    let mut inputs = InputQueue::new();

    // An idle player sinks to the floor and meets the next bottom obstacle
    let mut halted_at = None;
    for _ in 0..20_000 {
        if tick(&mut state, &mut inputs, &mut Headless) == FrameOutcome::Halted {
            halted_at = Some(state.frame);
            break;
        }
    }
    let halted_at = halted_at.expect("an idle player should eventually hit an obstacle");

    for _ in 0..10 {
        assert_eq!(tick(&mut state, &mut inputs, &mut Headless), FrameOutcome::Halted);
    }
    assert_eq!(state.frame, halted_at);

    state.restart();
    assert_eq!(tick(&mut state, &mut inputs, &mut Headless), FrameOutcome::Continue);
}
