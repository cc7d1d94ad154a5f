use soroban_sdk::Address;

use super::game::Game;

impl Game {
    /// True when `player` is expected to guess next.
    pub fn is_turn(&self, player: &Address) -> bool {
        self.turn.as_ref() == Some(player)
    }

    /// Hands the turn to the other player. No-op while no turn is active.
    pub(crate) fn advance_turn(&mut self) {
        self.turn = match self.turn.take() {
            Some(current) if current == self.player_one => Some(self.player_two.clone()),
            Some(_) => Some(self.player_one.clone()),
            None => None,
        };
    }
}
