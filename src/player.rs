use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// JSON body posted to the player endpoint. `number` carries the masked
/// display form of the phone number.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerRegistration {
    pub name: String,
    pub number: String,
    pub experience: String,
}

/// The fixed set of answers to "Qual a sua experiência no tênis?". The wire
/// format is the label string, so serialization goes through [`Display`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExperienceLevel {
    NeverPlayed,
    LessThanOneYear,
    OneToTwoYears,
    TwoToThreeYears,
    MoreThanThreeYears,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 5] = [
        ExperienceLevel::NeverPlayed,
        ExperienceLevel::LessThanOneYear,
        ExperienceLevel::OneToTwoYears,
        ExperienceLevel::TwoToThreeYears,
        ExperienceLevel::MoreThanThreeYears,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ExperienceLevel::NeverPlayed => "Nunca joguei",
            ExperienceLevel::LessThanOneYear => "Menos de 1 ano",
            ExperienceLevel::OneToTwoYears => "Entre 1 e 2 anos",
            ExperienceLevel::TwoToThreeYears => "Entre 2 e 3 anos",
            ExperienceLevel::MoreThanThreeYears => "Mais de 3 anos",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ExperienceLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ExperienceLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or(())
    }
}

impl Serialize for ExperienceLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_experience_from_label() {
        assert_eq!("Nunca joguei".parse(), Ok(ExperienceLevel::NeverPlayed));
        assert_eq!("Menos de 1 ano".parse(), Ok(ExperienceLevel::LessThanOneYear));
        assert_eq!("Entre 1 e 2 anos".parse(), Ok(ExperienceLevel::OneToTwoYears));
        assert_eq!("Entre 2 e 3 anos".parse(), Ok(ExperienceLevel::TwoToThreeYears));
        assert_eq!("Mais de 3 anos".parse(), Ok(ExperienceLevel::MoreThanThreeYears));
    }

    #[test]
    fn test_experience_rejects_unknown_labels() {
        assert_eq!("".parse::<ExperienceLevel>(), Err(()));
        assert_eq!("nunca joguei".parse::<ExperienceLevel>(), Err(()));
        assert_eq!("5 anos".parse::<ExperienceLevel>(), Err(()));
    }

    #[test]
    fn test_experience_label_round_trip() {
        for level in ExperienceLevel::ALL {
            assert_eq!(level.label().parse(), Ok(level));
        }
    }

    #[test]
    fn test_experience_to_json() {
        let value = serde_json::to_value(ExperienceLevel::OneToTwoYears).unwrap();
        assert_eq!(value, json!("Entre 1 e 2 anos"));
    }

    #[test]
    fn test_registration_json_shape() {
        let player = PlayerRegistration {
            name: "Gabriela Sabatini".to_string(),
            number: "(95) 99999-9999".to_string(),
            experience: ExperienceLevel::MoreThanThreeYears.to_string(),
        };

        assert_eq!(
            serde_json::to_value(&player).unwrap(),
            json!({
                "name": "Gabriela Sabatini",
                "number": "(95) 99999-9999",
                "experience": "Mais de 3 anos",
            })
        );
    }
}
