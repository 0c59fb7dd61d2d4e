use crate::game::Direction;

/// Anything that can answer "is the key for this direction held down"
pub trait KeySource {
    fn is_down(&self, direction: Direction) -> bool;
}

/// Turns held directional keys into the direction to queue.
///
/// Keys are checked in [`Direction::PRIORITY`] order and the first held key
/// that would not reverse the snake wins.
pub struct InputMapper;

impl InputMapper {
    pub fn resolve<K: KeySource + ?Sized>(keys: &K, committed: Direction) -> Option<Direction> {
        Direction::PRIORITY
            .into_iter()
            .find(|dir| keys.is_down(*dir) && !committed.is_opposite(*dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Held(Vec<Direction>);

    impl KeySource for Held {
        fn is_down(&self, direction: Direction) -> bool {
            self.0.contains(&direction)
        }
    }

    #[test]
    fn test_nothing_held() {
        assert_eq!(InputMapper::resolve(&Held(vec![]), Direction::Right), None);
    }

    #[test]
    fn test_single_key() {
        let keys = Held(vec![Direction::Down]);
        assert_eq!(
            InputMapper::resolve(&keys, Direction::None),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_reverse_is_ignored() {
        let keys = Held(vec![Direction::Left]);
        assert_eq!(InputMapper::resolve(&keys, Direction::Right), None);
    }

    #[test]
    fn test_priority_order() {
        let keys = Held(vec![Direction::Right, Direction::Down, Direction::Left]);
        assert_eq!(
            InputMapper::resolve(&keys, Direction::Up),
            Some(Direction::Left)
        );
    }

    #[test]
    fn test_skips_reverse_to_next_eligible() {
        // Up is the reverse of Down, so Left wins
        let keys = Held(vec![Direction::Up, Direction::Left]);
        assert_eq!(
            InputMapper::resolve(&keys, Direction::Down),
            Some(Direction::Left)
        );
    }
}
