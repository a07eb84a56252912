use super::{Material, MaterialFile};
use crate::StrError;
use log::{debug, warn};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

/// Holds the contents of the data files shipped with the crate
const BUILTIN_DATA: [&str; 6] = [
    include_str!("../../data/materials/Vacuum.json"),
    include_str!("../../data/materials/Si_2016_Smith.json"),
    include_str!("../../data/materials/Si_test_anisotropic.json"),
    include_str!("../../data/materials/SiO2_2016_Smith.json"),
    include_str!("../../data/materials/As2S3_2016_Smith.json"),
    include_str!("../../data/materials/GaAs_2016_Smith.json"),
];

/// Holds a collection of materials keyed by name
///
/// The registry is built explicitly by the host application; rotated
/// variants are new materials and may be inserted under another name.
#[derive(Clone, Debug, Default)]
pub struct MaterialRegistry {
    materials: HashMap<String, Material>,
}

impl MaterialRegistry {
    /// Allocates an empty registry
    pub fn new() -> Self {
        MaterialRegistry {
            materials: HashMap::new(),
        }
    }

    /// Allocates a registry with the materials shipped with the crate
    pub fn builtin() -> Result<Self, StrError> {
        let mut registry = MaterialRegistry::new();
        for text in BUILTIN_DATA {
            registry.insert(MaterialFile::from_json_str(text)?.to_material()?);
        }
        Ok(registry)
    }

    /// Allocates a registry with all `*.json` files in a directory
    ///
    /// Files that cannot be parsed are skipped (with a warning).
    ///
    /// # Input
    ///
    /// * `dir` -- may be a String, &str, or Path
    pub fn read_dir<P>(dir: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let mut registry = MaterialRegistry::new();
        let entries = fs::read_dir(Path::new(dir)).map_err(|_| "cannot read material data directory")?;
        for entry in entries {
            let path = entry.map_err(|_| "cannot read directory entry")?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match MaterialFile::read_json(&path).and_then(|data| data.to_material()) {
                Ok(material) => registry.insert(material),
                Err(e) => warn!("skipping {}: {}", path.display(), e),
            }
        }
        Ok(registry)
    }

    /// Inserts (or replaces) a material using its name as key
    pub fn insert(&mut self, material: Material) {
        debug!("registering material {}", material.name);
        self.materials.insert(material.name.clone(), material);
    }

    /// Returns the material with a given name
    pub fn get(&self, name: &str) -> Result<&Material, StrError> {
        self.materials.get(name).ok_or("cannot find material with the given name")
    }

    /// Returns the sorted names of all materials
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.materials.keys().map(|k| k.as_str()).collect();
        names.sort();
        names
    }

    /// Returns the number of materials
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Indicates whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::MaterialRegistry;
    use crate::material::Material;
    use crate::tensor::{Axis, CubicConstants};
    use crate::StrError;

    #[test]
    fn builtin_works() -> Result<(), StrError> {
        let registry = MaterialRegistry::builtin()?;
        assert_eq!(registry.len(), 6);
        assert_eq!(
            registry.names(),
            &[
                "As2S3_2016_Smith",
                "GaAs_2016_Smith",
                "SiO2_2016_Smith",
                "Si_2016_Smith",
                "Si_test_anisotropic",
                "Vacuum"
            ]
        );
        let si = registry.get("Si_2016_Smith")?;
        assert_eq!(si.chemical, "Si");
        assert_eq!(si.is_anisotropic(), false);
        assert_eq!(registry.get("Si_test_anisotropic")?.is_anisotropic(), true);
        assert_eq!(registry.get("Vacuum")?.refractive_index, 1.0);
        Ok(())
    }

    #[test]
    fn insert_and_get_work() -> Result<(), StrError> {
        let mut registry = MaterialRegistry::new();
        assert_eq!(registry.is_empty(), true);
        assert_eq!(registry.get("Si").err(), Some("cannot find material with the given name"));
        let cc = CubicConstants::new(1.0, 0.5, 0.25);
        let mat = Material::isotropic("Si", 3.48, 2329.0, cc, cc, cc);
        let mut rotated = mat.rotate(0.1, Axis::Z).unwrap();
        rotated.name = "Si_rotated".to_string();
        registry.insert(mat);
        registry.insert(rotated);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names(), &["Si", "Si_rotated"]);
        assert_eq!(registry.get("Si_rotated")?.rotation, Some((Axis::Z, 0.1)));
        Ok(())
    }

    #[test]
    fn read_dir_captures_errors() {
        assert_eq!(
            MaterialRegistry::read_dir("/tmp/optoacoustic/not-a-directory").err(),
            Some("cannot read material data directory")
        );
    }
}
