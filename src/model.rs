use std::path::Path;

use serde::Deserialize;

use crate::error::Error;

/// One tested specimen (corpo de prova) row of the results table.
#[derive(Debug, Clone, Deserialize)]
pub struct Amostra {
    /// Specimen identifier, e.g. "CP-014".
    pub cp: String,
    pub data_moldagem: String,
    pub data_ruptura: String,
    pub idade_dias: u32,
    /// Design characteristic strength in MPa.
    pub fck_projeto_mpa: f32,
    /// Breaking load in kN.
    pub carga_kn: f32,
    /// Measured compressive strength in MPa.
    pub resistencia_mpa: f32,
}

/// A compression-test lab report, as reviewed and confirmed in the UI.
#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    pub obra: String,
    pub cliente: String,
    pub data_emissao: String,
    #[serde(default)]
    pub responsavel: Option<String>,
    /// Free-text remarks, word-wrapped under the table.
    #[serde(default)]
    pub observacoes: Option<String>,
    pub amostras: Vec<Amostra>,
}

impl Report {
    pub fn from_json(data: &str) -> Result<Report, Error> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Report, Error> {
        let data = std::fs::read_to_string(path)?;
        Report::from_json(&data)
    }

    /// Mean measured strength across all rows, if any.
    pub fn resistencia_media_mpa(&self) -> Option<f32> {
        if self.amostras.is_empty() {
            return None;
        }
        let sum: f32 = self.amostras.iter().map(|a| a.resistencia_mpa).sum();
        Some(sum / self.amostras.len() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "obra": "Edifício Aurora - Torre B",
        "cliente": "Construtora Horizonte Ltda",
        "data_emissao": "2025-08-12",
        "responsavel": "Eng. M. Tavares",
        "amostras": [
            {"cp": "CP-001", "data_moldagem": "2025-07-01", "data_ruptura": "2025-07-29",
             "idade_dias": 28, "fck_projeto_mpa": 30.0, "carga_kn": 612.4, "resistencia_mpa": 34.7},
            {"cp": "CP-002", "data_moldagem": "2025-07-01", "data_ruptura": "2025-07-29",
             "idade_dias": 28, "fck_projeto_mpa": 30.0, "carga_kn": 598.1, "resistencia_mpa": 33.9}
        ]
    }"#;

    #[test]
    fn parses_report_json() {
        let report = Report::from_json(SAMPLE).unwrap();
        assert_eq!(report.amostras.len(), 2);
        assert_eq!(report.amostras[0].cp, "CP-001");
        assert!(report.observacoes.is_none());
    }

    #[test]
    fn mean_strength() {
        let report = Report::from_json(SAMPLE).unwrap();
        let media = report.resistencia_media_mpa().unwrap();
        assert!((media - 34.3).abs() < 0.01);
    }

    #[test]
    fn mean_strength_of_empty_report_is_none() {
        let report = Report::from_json(
            r#"{"obra": "x", "cliente": "y", "data_emissao": "2025-01-01", "amostras": []}"#,
        )
        .unwrap();
        assert!(report.resistencia_media_mpa().is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(Report::from_json("{"), Err(Error::Json(_))));
    }
}
