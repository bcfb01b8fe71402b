#[cfg(test)]
mod tests {
    use cad_pretest::{Recommendation, advise};

    #[test]
    fn test_low_probability_is_conservative() {
        assert_eq!(advise(0.0), Recommendation::Conservative);
        assert_eq!(advise(7.5), Recommendation::Conservative);
        assert_eq!(advise(14.99), Recommendation::Conservative);
    }

    #[test]
    fn test_intermediate_probability_gets_non_invasive_testing() {
        assert_eq!(advise(15.0), Recommendation::NonInvasiveTesting);
        assert_eq!(advise(41.6), Recommendation::NonInvasiveTesting);
        assert_eq!(advise(84.99), Recommendation::NonInvasiveTesting);
    }

    #[test]
    fn test_high_probability_gets_invasive_evaluation() {
        assert_eq!(advise(85.0), Recommendation::InvasiveEvaluation);
        assert_eq!(advise(100.0), Recommendation::InvasiveEvaluation);
    }

    #[test]
    fn test_thresholds_belong_to_the_upper_tier() {
        // 15 and 85 open their tiers; this boundary is clinical policy.
        assert_ne!(advise(14.99), advise(15.0));
        assert_ne!(advise(84.99), advise(85.0));
    }

    #[test]
    fn test_conduct_texts() {
        assert!(
            Recommendation::Conservative
                .description()
                .contains("preventive measures")
        );
        assert!(
            Recommendation::NonInvasiveTesting
                .description()
                .contains("stress test")
        );
        assert!(
            Recommendation::InvasiveEvaluation
                .description()
                .contains("catheterization")
        );
    }
}
