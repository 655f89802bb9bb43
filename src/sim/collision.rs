//! Collision detection and scoring
//!
//! Everything collides as axis-aligned boxes. Targets are resolved first so a
//! safe target eaten on the same frame as an obstacle hit still counts.

use glam::Vec2;

use super::state::{GameEvent, GameState, TargetKind};

/// Axis-aligned bounding box (top-left corner + extent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    #[inline]
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn square(min: Vec2, side: f32) -> Self {
        Self::new(min, Vec2::splat(side))
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// Strict overlap; boxes that only touch along an edge do not collide
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max().x
            && self.max().x > other.min.x
            && self.min.y < other.max().y
            && self.max().y > other.min.y
    }
}

/// What happened while resolving targets this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TargetOutcome {
    /// Safe targets eaten
    pub consumed: u32,
    /// A hazard was touched (scan stopped there)
    pub hazard_hit: bool,
}

/// Eat overlapping safe targets; stop at the first overlapping hazard.
///
/// Scans newest to oldest so removal never skips an entry.
pub fn resolve_targets(state: &mut GameState) -> TargetOutcome {
    let mut outcome = TargetOutcome::default();

    for i in (0..state.targets.len()).rev() {
        let target_box = state.targets[i].aabb();
        if !state.player.aabb().overlaps(&target_box) {
            continue;
        }

        match state.targets[i].kind() {
            TargetKind::Hazard => {
                log::debug!("Hazard {} hit at frame {}", state.targets[i].id, state.frame);
                outcome.hazard_hit = true;
                break;
            }
            TargetKind::Safe => {
                let target = state.targets.remove(i);
                state.player.size += state.tuning.growth;
                state.score += state.tuning.score_per_target;
                outcome.consumed += 1;
                log::debug!(
                    "Ate target {} (score {}, size {})",
                    target.id,
                    state.score,
                    state.player.size
                );
                state.push_event(GameEvent::TargetEaten {
                    target_id: target.id,
                    score: state.score,
                });
            }
        }
    }

    outcome
}

/// True if the player overlaps any obstacle
pub fn resolve_obstacles(state: &GameState) -> bool {
    let player_box = state.player.aabb();
    state
        .obstacles
        .iter()
        .any(|obs| player_box.overlaps(&obs.aabb()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{MovingTarget, Obstacle, ObstacleSide, Viewport};
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(1, Viewport::new(800.0, 600.0).unwrap(), Tuning::default()).unwrap()
    }

    fn push_target(state: &mut GameState, pos: Vec2, kind: TargetKind) -> u32 {
        let id = state.next_entity_id();
        state.targets.push(MovingTarget::new(
            id,
            pos,
            TARGET_SIZE,
            kind,
            Vec2::new(TARGET_DX, 0.0),
        ));
        id
    }

    fn push_obstacle(state: &mut GameState, pos: Vec2, height: f32) {
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle {
            id,
            pair_id: id,
            spawn_frame: 0,
            side: ObstacleSide::Top,
            pos,
            width: OBSTACLE_WIDTH,
            height,
        });
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::square(Vec2::new(0.0, 0.0), 10.0);
        assert!(a.overlaps(&Aabb::square(Vec2::new(5.0, 5.0), 10.0)));
        assert!(a.overlaps(&Aabb::square(Vec2::new(0.0, 0.0), 10.0)));
        // Edge contact is not an overlap
        assert!(!a.overlaps(&Aabb::square(Vec2::new(10.0, 0.0), 10.0)));
        assert!(!a.overlaps(&Aabb::square(Vec2::new(0.0, 10.0), 10.0)));
        assert!(!a.overlaps(&Aabb::new(Vec2::new(-20.0, 0.0), Vec2::new(5.0, 50.0))));
        // Zero-height boxes never overlap
        assert!(!a.overlaps(&Aabb::new(Vec2::new(0.0, 5.0), Vec2::new(10.0, 0.0))));
    }

    #[test]
    fn test_eat_coincident_safe_target() {
        let mut state = state();
        let pos = state.player.pos;
        push_target(&mut state, pos, TargetKind::Safe);
        push_target(&mut state, Vec2::new(700.0, 10.0), TargetKind::Safe);

        let outcome = resolve_targets(&mut state);

        assert_eq!(outcome.consumed, 1);
        assert!(!outcome.hazard_hit);
        assert_eq!(state.score, SCORE_PER_TARGET);
        assert_eq!(state.player.size, PLAYER_SIZE + PLAYER_GROWTH);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.targets[0].pos, Vec2::new(700.0, 10.0));
    }

    #[test]
    fn test_eat_multiple_targets_same_frame() {
        let mut state = state();
        let pos = state.player.pos;
        let first = push_target(&mut state, pos, TargetKind::Safe);
        let second = push_target(&mut state, pos + Vec2::new(5.0, 5.0), TargetKind::Safe);

        let outcome = resolve_targets(&mut state);

        assert_eq!(outcome.consumed, 2);
        assert!(state.targets.is_empty());
        assert_eq!(state.score, 2 * SCORE_PER_TARGET);
        let events = state.drain_events();
        assert_eq!(
            events,
            vec![
                GameEvent::TargetEaten {
                    target_id: second,
                    score: SCORE_PER_TARGET
                },
                GameEvent::TargetEaten {
                    target_id: first,
                    score: 2 * SCORE_PER_TARGET
                },
            ]
        );
    }

    #[test]
    fn test_hazard_short_circuits() {
        let mut state = state();
        let pos = state.player.pos;
        // Older safe target sits behind the newer hazard in scan order
        push_target(&mut state, pos, TargetKind::Safe);
        push_target(&mut state, pos, TargetKind::Hazard);

        let outcome = resolve_targets(&mut state);

        assert!(outcome.hazard_hit);
        assert_eq!(outcome.consumed, 0);
        assert_eq!(state.score, 0);
        assert_eq!(state.targets.len(), 2);
    }

    #[test]
    fn test_hazard_is_not_eaten() {
        let mut state = state();
        let pos = state.player.pos;
        push_target(&mut state, pos, TargetKind::Hazard);

        let outcome = resolve_targets(&mut state);
        assert!(outcome.hazard_hit);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.player.size, PLAYER_SIZE);
    }

    #[test]
    fn test_obstacle_collision() {
        let mut state = state();
        assert!(!resolve_obstacles(&state));

        // Column well to the right
        push_obstacle(&mut state, Vec2::new(600.0, 0.0), 600.0);
        assert!(!resolve_obstacles(&state));

        // Column through the player
        let x = state.player.pos.x + 5.0;
        push_obstacle(&mut state, Vec2::new(x, 0.0), 600.0);
        assert!(resolve_obstacles(&state));
    }

    #[test]
    fn test_player_passes_through_gap() {
        let mut state = state();
        let x = state.player.pos.x;
        let y = state.player.pos.y;
        // Gap from y-10 to y+size+10
        push_obstacle(&mut state, Vec2::new(x, 0.0), y - 10.0);
        push_obstacle(&mut state, Vec2::new(x, y + PLAYER_SIZE + 10.0), 600.0);
        assert!(!resolve_obstacles(&state));
    }
}
