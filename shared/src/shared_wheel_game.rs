use rand::Rng;

use crate::error::WheelError;
use crate::name_list::NameList;
use crate::wheel_layout::WheelGeometry;
use crate::wheel_spin::{SpinConfig, SpinMachine, SpinState};
use crate::wheel_view::WheelFrame;

/// Names on the wheel, the names already picked, and the spin in progress.
pub struct WheelGame<R> {
    names: NameList,
    selected: Vec<String>,
    spin: SpinMachine<R>,
}

impl<R: Rng> WheelGame<R> {
    pub fn new(rng: R) -> Self {
        Self::with_config(rng, SpinConfig::default())
    }

    pub fn with_config(rng: R, config: SpinConfig) -> Self {
        Self {
            names: NameList::new(),
            selected: Vec::new(),
            spin: SpinMachine::new(rng, config),
        }
    }

    pub fn names(&self) -> &[String] {
        self.names.as_slice()
    }

    pub fn selected(&self) -> &[String] {
        &self.selected
    }

    pub fn spin_state(&self) -> &SpinState {
        self.spin.state()
    }

    pub fn spin_duration_ms(&self) -> f64 {
        self.spin.config().duration_ms
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.is_spinning()
    }

    pub fn can_spin(&self) -> bool {
        !self.names.is_empty() && !self.is_spinning()
    }

    /// The name list may change only between spins, not while a result is
    /// still waiting to be acknowledged.
    pub fn names_locked(&self) -> bool {
        !matches!(self.spin.state(), SpinState::Idle)
    }

    pub fn spin_remaining_ms(&self, now: f64) -> f64 {
        self.spin.remaining_ms(now)
    }

    pub fn add_name(&mut self, raw: &str) -> Result<(), WheelError> {
        self.ensure_idle()?;
        self.names.add(raw)?;
        Ok(())
    }

    pub fn remove_name_at(&mut self, index: usize) -> Result<Option<String>, WheelError> {
        self.ensure_idle()?;
        Ok(self.names.remove(index))
    }

    pub fn clear_names(&mut self) -> Result<(), WheelError> {
        self.ensure_idle()?;
        self.names.clear();
        Ok(())
    }

    pub fn request_spin(&mut self, now: f64) -> bool {
        self.spin.request_spin(self.names.as_slice(), now)
    }

    pub fn animation_complete(&mut self, now: f64) -> Option<String> {
        self.spin.animation_complete(now)
    }

    /// Takes the settled winner off the wheel and records it as selected.
    pub fn acknowledge_winner(&mut self) -> Option<String> {
        let winner = self.spin.acknowledge()?;
        if !self.names.remove_name(&winner) {
            log::warn!("Settled winner {} was no longer on the wheel, not recording it.", winner);
            return None;
        }
        self.selected.push(winner.clone());
        Some(winner)
    }

    /// Starts over with an empty wheel and no history.
    pub fn reset(&mut self) -> Result<(), WheelError> {
        self.ensure_not_spinning()?;
        self.spin.acknowledge();
        self.names.clear();
        self.selected.clear();
        Ok(())
    }

    pub fn frame(&self, geometry: WheelGeometry, now: f64) -> WheelFrame {
        WheelFrame::compose(self.names.as_slice(), geometry, &self.spin, now)
    }

    fn ensure_idle(&self) -> Result<(), WheelError> {
        if self.names_locked() {
            return Err(WheelError::SpinInProgress);
        }
        Ok(())
    }

    fn ensure_not_spinning(&self) -> Result<(), WheelError> {
        if self.is_spinning() {
            return Err(WheelError::SpinInProgress);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel_layout::sector_at;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game_with(names: &[&str]) -> WheelGame<StdRng> {
        let mut game = WheelGame::new(StdRng::seed_from_u64(17));
        for name in names {
            game.add_name(name).unwrap();
        }
        game
    }

    #[test]
    fn test_cannot_spin_empty_wheel() {
        let mut game = game_with(&[]);
        assert!(!game.can_spin());
        assert!(!game.request_spin(0.0));
        assert_eq!(game.spin_state(), &SpinState::Idle);
    }

    #[test]
    fn test_names_locked_while_spinning() {
        let mut game = game_with(&["Alice", "Bob"]);
        assert!(game.request_spin(0.0));
        assert_eq!(game.add_name("Carol"), Err(WheelError::SpinInProgress));
        assert_eq!(game.remove_name_at(0), Err(WheelError::SpinInProgress));
        assert_eq!(game.clear_names(), Err(WheelError::SpinInProgress));
        assert_eq!(game.reset(), Err(WheelError::SpinInProgress));
        assert_eq!(game.names().len(), 2);
    }

    #[test]
    fn test_names_locked_until_acknowledged() {
        for seed in 0..20 {
            let mut game = WheelGame::new(StdRng::seed_from_u64(seed));
            for name in ["Alice", "Bob", "Carol"] {
                game.add_name(name).unwrap();
            }
            assert!(game.request_spin(0.0));
            let winner = game.animation_complete(f64::MAX).unwrap();
            assert!(game.names_locked());

            assert_eq!(game.add_name("Dave"), Err(WheelError::SpinInProgress));
            assert_eq!(game.remove_name_at(0), Err(WheelError::SpinInProgress));
            assert_eq!(game.clear_names(), Err(WheelError::SpinInProgress));
            assert_eq!(game.names().len(), 3);

            let frame = game.frame(WheelGeometry::default(), f64::MAX);
            let index = sector_at(frame.rotation_deg.to_radians(), 3).unwrap();
            assert_eq!(game.names()[index], winner);

            assert_eq!(game.acknowledge_winner(), Some(winner));
            assert!(!game.names_locked());
            assert!(game.add_name("Dave").is_ok());
        }
    }

    #[test]
    fn test_winner_moves_to_selected() {
        let mut game = game_with(&["Alice", "Bob", "Carol"]);
        let mut completions = 0;

        assert!(game.request_spin(0.0));
        assert!(!game.request_spin(10.0));
        let winner = game.animation_complete(f64::MAX).unwrap();
        completions += 1;
        if game.animation_complete(f64::MAX).is_some() {
            completions += 1;
        }
        assert_eq!(completions, 1);

        assert_eq!(game.acknowledge_winner(), Some(winner.clone()));
        assert!(!game.names().contains(&winner));
        assert_eq!(game.names().len(), 2);
        assert_eq!(game.selected(), [winner]);
        assert_eq!(game.spin_state(), &SpinState::Idle);
    }

    #[test]
    fn test_draws_until_wheel_is_empty() {
        let mut game = game_with(&["Alice", "Bob", "Carol", "Dave"]);
        let mut now = 0.0;
        while game.can_spin() {
            assert!(game.request_spin(now));
            now += game.spin_duration_ms();
            game.animation_complete(f64::MAX);
            game.acknowledge_winner();
        }
        let mut selected = game.selected().to_vec();
        selected.sort();
        assert_eq!(selected, ["Alice", "Bob", "Carol", "Dave"]);
        assert!(game.names().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut game = game_with(&["Alice", "Bob"]);
        game.request_spin(0.0);
        game.animation_complete(f64::MAX);
        game.reset().unwrap();
        assert!(game.names().is_empty());
        assert!(game.selected().is_empty());
        assert_eq!(game.spin_state(), &SpinState::Idle);
    }

    #[test]
    fn test_frame_reflects_settled_winner() {
        let mut game = game_with(&["Alice", "Bob", "Carol"]);
        game.request_spin(0.0);
        let winner = game.animation_complete(f64::MAX);
        let frame = game.frame(WheelGeometry::default(), 3_000.0);
        assert_eq!(frame.winner, winner);
        assert_eq!(frame.sectors.len(), 3);
    }
}
