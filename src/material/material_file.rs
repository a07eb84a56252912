use super::{Material, MaterialTensors, Provenance};
use crate::tensor::{CubicConstants, VoigtTensor};
use crate::StrError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Holds the contents of a material data file (JSON with `//` comments)
///
/// The (11, 12, 44) components are always required. If all 36 components
/// of the three tensors (e.g., `c_11`, ..., `c_66`) are present, the
/// material is anisotropic.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MaterialFile {
    /// Name of this file (identifier of the material)
    pub file_name: String,

    /// Chemical composition
    pub chemical: String,

    /// Author of data
    pub author: String,

    /// Year of data publication or measurement
    pub date: String,

    /// Source institution
    pub institution: String,

    /// DOI or, failing that, the web address
    pub doi: String,

    /// Refractive index [-]
    pub n: f64,

    /// Density [kg/m³]
    pub s: f64,

    pub c_11: f64,
    pub c_12: f64,
    pub c_44: f64,
    pub p_11: f64,
    pub p_12: f64,
    pub p_44: f64,
    pub eta_11: f64,
    pub eta_12: f64,
    pub eta_44: f64,

    /// Other components (e.g., `c_16`)
    #[serde(flatten)]
    pub others: BTreeMap<String, serde_json::Value>,
}

impl MaterialFile {
    /// Parses the text of a data file
    pub fn from_json_str(text: &str) -> Result<Self, StrError> {
        let clean = strip_line_comments(text);
        let data = serde_json::from_str(&clean).map_err(|_| "cannot parse material data")?;
        Ok(data)
    }

    /// Reads a data file
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let text = fs::read_to_string(&path).map_err(|_| "cannot read material data file")?;
        debug!("read material data from {}", path.display());
        MaterialFile::from_json_str(&text)
    }

    /// Returns the (i,j) component (one-based, as in the file keys) of a tensor
    fn component(&self, prefix: &str, i: usize, j: usize) -> Option<f64> {
        match (prefix, i, j) {
            ("c", 1, 1) => Some(self.c_11),
            ("c", 1, 2) => Some(self.c_12),
            ("c", 4, 4) => Some(self.c_44),
            ("p", 1, 1) => Some(self.p_11),
            ("p", 1, 2) => Some(self.p_12),
            ("p", 4, 4) => Some(self.p_44),
            ("eta", 1, 1) => Some(self.eta_11),
            ("eta", 1, 2) => Some(self.eta_12),
            ("eta", 4, 4) => Some(self.eta_44),
            _ => self.others.get(&format!("{}_{}{}", prefix, i, j)).and_then(|v| v.as_f64()),
        }
    }

    /// Returns the full 6×6 tensor if all of its components are given
    fn full_tensor(&self, prefix: &str) -> Option<VoigtTensor> {
        let mut tensor = VoigtTensor::new();
        for m in 0..6 {
            for n in 0..6 {
                tensor.set(m, n, self.component(prefix, m + 1, n + 1)?);
            }
        }
        Some(tensor)
    }

    /// Converts the data into a (validated) material
    pub fn to_material(&self) -> Result<Material, StrError> {
        let full = (self.full_tensor("c"), self.full_tensor("p"), self.full_tensor("eta"));
        let tensors = match full {
            (Some(c), Some(p), Some(eta)) => MaterialTensors::Anisotropic { c, p, eta },
            _ => {
                if !self.others.is_empty() {
                    warn!(
                        "{}: incomplete set of tensor components; using the (11, 12, 44) components only",
                        self.file_name
                    );
                }
                MaterialTensors::Isotropic {
                    c: CubicConstants::new(self.c_11, self.c_12, self.c_44),
                    p: CubicConstants::new(self.p_11, self.p_12, self.p_44),
                    eta: CubicConstants::new(self.eta_11, self.eta_12, self.eta_44),
                }
            }
        };
        let material = Material {
            name: self.file_name.clone(),
            chemical: self.chemical.clone(),
            provenance: Provenance {
                author: self.author.clone(),
                date: self.date.clone(),
                institution: self.institution.clone(),
                doi: self.doi.clone(),
            },
            refractive_index: self.n,
            density: self.s,
            tensors,
            rotation: None,
        };
        material.validate()?;
        Ok(material)
    }
}

/// Removes `//` comments (outside of strings) up to the end of the line
fn strip_line_comments(text: &str) -> String {
    let mut res = String::with_capacity(text.len());
    for line in text.lines() {
        let mut in_string = false;
        let mut escaped = false;
        let mut cut = line.len();
        let bytes = line.as_bytes();
        for (k, &b) in bytes.iter().enumerate() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if b == b'\\' {
                    escaped = true;
                } else if b == b'"' {
                    in_string = false;
                }
            } else if b == b'"' {
                in_string = true;
            } else if b == b'/' && bytes.get(k + 1) == Some(&b'/') {
                cut = k;
                break;
            }
        }
        res.push_str(&line[..cut]);
        res.push('\n');
    }
    res
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{strip_line_comments, MaterialFile};
    use crate::tensor::CubicConstants;
    use crate::StrError;

    const SAMPLE: &str = r#"{
        // a comment
        "file_name": "Si_sample", // trailing comment
        "chemical": "Si",
        "author": "Someone",
        "date": "2016",
        "institution": "Somewhere",
        "doi": "http://dx.doi.org/sample",
        "n": 3.48,
        "s": 2329.0,
        "c_11": 165.7e9, "c_12": 63.9e9, "c_44": 79.6e9,
        "p_11": -0.094, "p_12": 0.017, "p_44": -0.051,
        "eta_11": 5.9e-3, "eta_12": 5.16e-3, "eta_44": 0.362e-3
    }"#;

    #[test]
    fn strip_line_comments_works() {
        assert_eq!(strip_line_comments("a // b\n// c\nd"), "a \n\nd\n");
        assert_eq!(strip_line_comments("\"http://x\" // y"), "\"http://x\" \n");
        assert_eq!(strip_line_comments("\"a\\\"//b\" //c"), "\"a\\\"//b\" \n");
    }

    #[test]
    fn from_json_str_works() -> Result<(), StrError> {
        let data = MaterialFile::from_json_str(SAMPLE)?;
        assert_eq!(data.file_name, "Si_sample");
        assert_eq!(data.doi, "http://dx.doi.org/sample");
        assert_eq!(data.others.len(), 0);
        let mat = data.to_material()?;
        assert_eq!(mat.name, "Si_sample");
        assert_eq!(mat.chemical, "Si");
        assert_eq!(mat.provenance.author, "Someone");
        assert_eq!(mat.refractive_index, 3.48);
        assert_eq!(mat.density, 2329.0);
        assert_eq!(mat.is_anisotropic(), false);
        assert_eq!(mat.stiffness().reduced(), CubicConstants::new(165.7e9, 63.9e9, 79.6e9));
        Ok(())
    }

    #[test]
    fn incomplete_components_give_isotropic_material() -> Result<(), StrError> {
        let text = SAMPLE.replace("\"n\": 3.48,", "\"n\": 3.48, \"c_16\": 1.0,");
        let data = MaterialFile::from_json_str(&text)?;
        assert_eq!(data.others.len(), 1);
        let mat = data.to_material()?;
        assert_eq!(mat.is_anisotropic(), false);
        assert_eq!(mat.stiffness().get(0, 5), 0.0);
        Ok(())
    }

    #[test]
    fn full_components_give_anisotropic_material() -> Result<(), StrError> {
        let mut extra = String::new();
        for prefix in ["c", "p", "eta"] {
            for i in 1..7 {
                for j in 1..7 {
                    let key = format!("{}{}", i, j);
                    if key == "11" || key == "12" || key == "44" {
                        continue;
                    }
                    let value = if i == 1 && j == 6 { 7.0 } else { 0.0 };
                    extra.push_str(&format!("\"{}_{}\": {:?}, ", prefix, key, value));
                }
            }
        }
        let text = SAMPLE.replace("\"n\": 3.48,", &format!("{} \"n\": 3.48,", extra));
        let mat = MaterialFile::from_json_str(&text)?.to_material()?;
        assert_eq!(mat.is_anisotropic(), true);
        let c = mat.stiffness();
        assert_eq!(c.get(0, 0), 165.7e9);
        assert_eq!(c.get(0, 1), 63.9e9);
        assert_eq!(c.get(3, 3), 79.6e9);
        assert_eq!(c.get(0, 5), 7.0);
        assert_eq!(c.get(1, 1), 0.0);
        assert_eq!(mat.acoustic_loss().get(0, 5), 7.0);
        Ok(())
    }

    #[test]
    fn errors_are_captured() {
        assert_eq!(
            MaterialFile::from_json_str("{ \"file_name\": \"x\" }").err(),
            Some("cannot parse material data")
        );
        assert_eq!(
            MaterialFile::read_json("/tmp/optoacoustic/not-found.json").err(),
            Some("cannot read material data file")
        );
        let text = SAMPLE.replace("\"s\": 2329.0,", "\"s\": -1.0,");
        let data = MaterialFile::from_json_str(&text).unwrap();
        assert_eq!(data.to_material().err(), Some("density must be ≥ 0.0"));
    }
}
