#[cfg(test)]
mod tests {
    use cad_pretest::{
        PatientQuery, Recommendation, RiskAssessment, RiskError, RiskFactor, Sex, SymptomCategory,
    };

    #[test]
    fn test_sex_parsing() {
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert_eq!(" Female ".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("m".parse::<Sex>().unwrap(), Sex::Male);
        assert!("other".parse::<Sex>().is_err());
    }

    #[test]
    fn test_symptom_parsing() {
        assert_eq!(
            "typical_angina".parse::<SymptomCategory>().unwrap(),
            SymptomCategory::TypicalAngina
        );
        assert_eq!(
            "atypical".parse::<SymptomCategory>().unwrap(),
            SymptomCategory::AtypicalAngina
        );
        assert_eq!(
            "non_anginal".parse::<SymptomCategory>().unwrap(),
            SymptomCategory::NonAnginal
        );
        assert_eq!(
            "Asymptomatic".parse::<SymptomCategory>().unwrap(),
            SymptomCategory::Asymptomatic
        );
        assert!("chest_pain".parse::<SymptomCategory>().is_err());
    }

    #[test]
    fn test_risk_factor_parsing() {
        assert_eq!(
            "family_history".parse::<RiskFactor>().unwrap(),
            RiskFactor::FamilyHistory
        );
        assert_eq!(
            "diabetes".parse::<RiskFactor>().unwrap(),
            RiskFactor::Diabetes
        );
        assert!("obesity".parse::<RiskFactor>().is_err());
    }

    #[test]
    fn test_from_raw_builds_a_valid_query() {
        let query = PatientQuery::from_raw(
            "55",
            "male",
            "typical_angina",
            &["diabetes", "hypertension", "smoking"],
        )
        .unwrap();

        assert_eq!(query.age, 55);
        assert_eq!(query.sex, Sex::Male);
        assert_eq!(query.symptom, SymptomCategory::TypicalAngina);
        assert_eq!(query.risk_factor_count(), 3);
    }

    #[test]
    fn test_from_raw_collapses_duplicate_factors() {
        let query = PatientQuery::from_raw(
            "55",
            "male",
            "typical_angina",
            &["diabetes", "diabetes", "diabetes"],
        )
        .unwrap();
        assert_eq!(query.risk_factor_count(), 1);
    }

    #[test]
    fn test_from_raw_rejects_bad_age_text() {
        let result = PatientQuery::from_raw::<&str>("fifty", "male", "typical_angina", &[]);
        assert!(matches!(result, Err(RiskError::InvalidInput(_))));

        let result = PatientQuery::from_raw::<&str>("-5", "male", "typical_angina", &[]);
        assert!(matches!(result, Err(RiskError::InvalidInput(_))));
    }

    #[test]
    fn test_from_raw_rejects_unknown_vocabulary() {
        let result = PatientQuery::from_raw::<&str>("55", "unknown", "typical_angina", &[]);
        assert!(matches!(result, Err(RiskError::InvalidInput(_))));

        let result = PatientQuery::from_raw::<&str>("55", "male", "dizziness", &[]);
        assert!(matches!(result, Err(RiskError::InvalidInput(_))));

        let result = PatientQuery::from_raw("55", "male", "typical_angina", &["obesity"]);
        assert!(matches!(result, Err(RiskError::InvalidInput(_))));
    }

    #[test]
    fn test_assessment_serializes_to_snake_case_json() {
        let assessment = RiskAssessment {
            probability: 41.6,
            recommendation: Recommendation::NonInvasiveTesting,
        };
        let json = serde_json::to_string(&assessment).unwrap();
        assert_eq!(
            json,
            r#"{"probability":41.6,"recommendation":"non_invasive_testing"}"#
        );

        let back: RiskAssessment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, assessment);
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        let err = RiskError::AgeOutOfRange(25);
        assert_eq!(
            err.to_string(),
            "age 25 is outside the tabulated range (30-69 years)"
        );

        let err = "other".parse::<Sex>().unwrap_err();
        assert_eq!(err.to_string(), "invalid input: unknown sex 'other'");
    }
}
