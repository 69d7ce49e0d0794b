use proptest::prelude::*;

use crate::domain::scoring::{score_round, RoundOutcome};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: scoring depends only on the calling team's trick count
    #[test]
    fn prop_round_scoring_for_any_caller(
        caller in test_gens::seat(),
        taken in 0u8..=5,
    ) {
        let team = caller.team();
        let mut tricks = [0u8; 2];
        tricks[team.index()] = taken;
        tricks[team.opponent().index()] = 5 - taken;

        let pts = score_round(caller, tricks).unwrap();
        match taken {
            5 => {
                prop_assert_eq!(pts.team, team);
                prop_assert_eq!(pts.points, 2);
                prop_assert_eq!(pts.outcome, RoundOutcome::March);
            }
            3 | 4 => {
                prop_assert_eq!(pts.team, team);
                prop_assert_eq!(pts.points, 1);
                prop_assert_eq!(pts.outcome, RoundOutcome::Made);
            }
            _ => {
                prop_assert_eq!(pts.team, team.opponent());
                prop_assert_eq!(pts.points, 2);
                prop_assert_eq!(pts.outcome, RoundOutcome::Euchred);
            }
        }
    }
}
