//! Form identifiers
//!
//! Checklist templates are addressed by short codes such as `GA2-CRANE` or
//! `GA3`. These codes are what operators see on the dashboard, so the literal
//! text is preserved exactly; internally they are closed enums.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Plant-specific daily pre-start form family (the `GA2-*` series)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormType {
    Mewp,
    Excavator,
    Dumper,
    Crane,
    Generator,
    Compressor,
    Formwork,
    Telehandler,
    Ladder,
    Tower,
    Podium,
}

impl FormType {
    pub const ALL: [FormType; 11] = [
        FormType::Mewp,
        FormType::Excavator,
        FormType::Dumper,
        FormType::Crane,
        FormType::Generator,
        FormType::Compressor,
        FormType::Formwork,
        FormType::Telehandler,
        FormType::Ladder,
        FormType::Tower,
        FormType::Podium,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormType::Mewp => "GA2-MEWP",
            FormType::Excavator => "GA2-EXC",
            FormType::Dumper => "GA2-DMP",
            FormType::Crane => "GA2-CRANE",
            FormType::Generator => "GA2-GEN",
            FormType::Compressor => "GA2-COMP",
            FormType::Formwork => "GA2-FWORK",
            FormType::Telehandler => "GA2-TELEH",
            FormType::Ladder => "GA2-LADD",
            FormType::Tower => "GA2-TOWER",
            FormType::Podium => "GA2-PODIUM",
        }
    }

    /// Forms available for a plant of this type, daily pre-start first.
    pub fn applicable_forms(form_type: Option<FormType>) -> Vec<FormId> {
        use FormId::{HazardAssessment, Maintenance, PreLift, PreStart};

        match form_type {
            Some(
                t @ (FormType::Mewp
                | FormType::Excavator
                | FormType::Dumper
                | FormType::Generator
                | FormType::Compressor),
            ) => vec![PreStart(t), HazardAssessment, Maintenance],
            Some(t @ (FormType::Crane | FormType::Telehandler)) => {
                vec![PreStart(t), HazardAssessment, Maintenance, PreLift]
            }
            Some(t @ FormType::Formwork) => vec![PreStart(t), HazardAssessment],
            Some(FormType::Ladder | FormType::Tower | FormType::Podium) | None => {
                vec![HazardAssessment, Maintenance]
            }
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form id '{0}'")]
pub struct UnknownFormId(pub String);

impl FromStr for FormType {
    type Err = UnknownFormId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        FormType::ALL
            .into_iter()
            .find(|t| t.as_str() == wanted)
            .ok_or_else(|| UnknownFormId(s.to_string()))
    }
}

impl TryFrom<String> for FormType {
    type Error = UnknownFormId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormType> for String {
    fn from(value: FormType) -> Self {
        value.as_str().to_string()
    }
}

/// Identifier of a checklist template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FormId {
    /// `GA1` plant registration / static safety file
    StaticRecord,
    /// Generic `GA2` daily pre-start, used for plant without a form type
    GenericPreStart,
    /// Plant-specific `GA2-*` daily pre-start
    PreStart(FormType),
    /// `GA3` weekly plant hazard assessment
    HazardAssessment,
    /// `GA4` plant maintenance checklist
    Maintenance,
    /// `GL1` pre-lift safety checklist
    PreLift,
}

impl FormId {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormId::StaticRecord => "GA1",
            FormId::GenericPreStart => "GA2",
            FormId::PreStart(t) => t.as_str(),
            FormId::HazardAssessment => "GA3",
            FormId::Maintenance => "GA4",
            FormId::PreLift => "GL1",
        }
    }

    /// Daily pre-start form for a plant with the given form type
    pub fn daily_for(form_type: Option<FormType>) -> Self {
        form_type.map_or(FormId::GenericPreStart, FormId::PreStart)
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormId {
    type Err = UnknownFormId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GA1" => Ok(FormId::StaticRecord),
            "GA2" => Ok(FormId::GenericPreStart),
            "GA3" => Ok(FormId::HazardAssessment),
            "GA4" => Ok(FormId::Maintenance),
            "GL1" => Ok(FormId::PreLift),
            _ => s.parse::<FormType>().map(FormId::PreStart),
        }
    }
}

impl TryFrom<String> for FormId {
    type Error = UnknownFormId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FormId> for String {
    fn from(value: FormId) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_form_falls_back_to_generic() {
        assert_eq!(FormId::daily_for(None).as_str(), "GA2");
        assert_eq!(
            FormId::daily_for(Some(FormType::Crane)).as_str(),
            "GA2-CRANE"
        );
    }

    #[test]
    fn parse_known_ids() {
        assert_eq!("GA3".parse::<FormId>().unwrap(), FormId::HazardAssessment);
        assert_eq!(
            "ga2-teleh".parse::<FormId>().unwrap(),
            FormId::PreStart(FormType::Telehandler)
        );
        assert!("GA9".parse::<FormId>().is_err());
    }

    #[test]
    fn every_form_type_parses_back() {
        for t in FormType::ALL {
            assert_eq!(t.as_str().parse::<FormType>().unwrap(), t);
            assert_eq!(FormId::PreStart(t).as_str().parse::<FormId>().unwrap(), FormId::PreStart(t));
        }
    }

    #[test]
    fn serializes_as_literal_code() {
        let json = serde_json::to_string(&FormId::PreStart(FormType::Mewp)).unwrap();
        assert_eq!(json, r#""GA2-MEWP""#);
        let parsed: FormId = serde_json::from_str(r#""GL1""#).unwrap();
        assert_eq!(parsed, FormId::PreLift);
        assert!(serde_json::from_str::<FormId>(r#""bogus""#).is_err());
    }

    #[test]
    fn crane_gets_pre_lift_checklist() {
        let forms = FormType::applicable_forms(Some(FormType::Crane));
        assert_eq!(
            forms,
            vec![
                FormId::PreStart(FormType::Crane),
                FormId::HazardAssessment,
                FormId::Maintenance,
                FormId::PreLift
            ]
        );
    }

    #[test]
    fn formwork_has_no_maintenance_form() {
        let forms = FormType::applicable_forms(Some(FormType::Formwork));
        assert_eq!(
            forms,
            vec![FormId::PreStart(FormType::Formwork), FormId::HazardAssessment]
        );
    }

    #[test]
    fn access_equipment_uses_default_forms() {
        let expected = vec![FormId::HazardAssessment, FormId::Maintenance];
        assert_eq!(FormType::applicable_forms(Some(FormType::Ladder)), expected);
        assert_eq!(FormType::applicable_forms(None), expected);
    }
}
