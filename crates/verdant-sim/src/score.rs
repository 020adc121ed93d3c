//! Running score totals for the active level.

use verdant_core::state::ScoreView;

#[derive(Debug, Clone, Default)]
pub struct ScoreState {
    pub attackers_killed: u32,
    pub attackers_total: u32,
    pub sun_collected: u32,
    pub defenders_placed: u32,
}

impl ScoreState {
    pub fn to_view(&self, elapsed_secs: f64) -> ScoreView {
        ScoreView {
            attackers_killed: self.attackers_killed,
            attackers_total: self.attackers_total,
            sun_collected: self.sun_collected,
            defenders_placed: self.defenders_placed,
            elapsed_secs,
        }
    }
}
