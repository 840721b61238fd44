//! Static catalog of recommendable degree programs

use crate::profile::fields::EngineeringField;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCandidate {
    pub name: String,
    pub institution: String,
    pub city: String,
    pub field: EngineeringField,
    pub duration: String,
    pub description: String,
}

impl CareerCandidate {
    pub fn new(
        name: &str,
        institution: &str,
        city: &str,
        field: EngineeringField,
        duration: &str,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            institution: institution.to_string(),
            city: city.to_string(),
            field,
            duration: duration.to_string(),
            description: description.to_string(),
        }
    }

    /// Identity of a program: the same degree at another institution is a different career.
    pub fn key(&self) -> (&str, &str) {
        (&self.name, &self.institution)
    }

    pub fn is_same_career(&self, other: &CareerCandidate) -> bool {
        self.key() == other.key()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerCatalog {
    careers: Vec<CareerCandidate>,
}

impl CareerCatalog {
    pub fn new(careers: Vec<CareerCandidate>) -> Self {
        Self { careers }
    }

    pub fn as_slice(&self) -> &[CareerCandidate] {
        &self.careers
    }

    pub fn len(&self) -> usize {
        self.careers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    pub fn by_field(&self, field: EngineeringField) -> Vec<&CareerCandidate> {
        self.careers.iter().filter(|c| c.field == field).collect()
    }

    /// Case-insensitive lookup by program name; the first catalog entry wins.
    pub fn find_by_name(&self, name: &str) -> Option<&CareerCandidate> {
        let wanted = name.trim().to_lowercase();
        self.careers.iter().find(|c| c.name.to_lowercase() == wanted)
    }

    /// Closest program name by Jaro-Winkler similarity, for "did you mean" hints.
    pub fn closest_name(&self, name: &str) -> Option<(&CareerCandidate, f64)> {
        let wanted = name.trim().to_lowercase();
        self.careers
            .iter()
            .map(|c| (c, jaro_winkler(&c.name.to_lowercase(), &wanted)))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// The twelve programs shipped with the application.
    pub fn reference() -> Self {
        use EngineeringField::*;

        Self::new(vec![
            CareerCandidate::new(
                "Ingeniería Mecatrónica",
                "Universidad Panamericana",
                "Ciudad de México",
                Mechatronics,
                "4.5 años",
                "Combina mecánica, electrónica, control y computación para diseñar sistemas robóticos avanzados.",
            ),
            CareerCandidate::new(
                "Ingeniería en Robótica",
                "ITESM",
                "Monterrey",
                Robotics,
                "4 años",
                "Especialización en diseño, programación y control de sistemas robóticos para aplicaciones industriales y de servicio.",
            ),
            CareerCandidate::new(
                "Ciencias de la Computación",
                "UNAM",
                "Ciudad de México",
                ComputerScience,
                "4 años",
                "Enfocada en algoritmos, inteligencia artificial, desarrollo de software y sistemas computacionales.",
            ),
            CareerCandidate::new(
                "Ingeniería Eléctrica",
                "IPN",
                "Ciudad de México",
                Electrical,
                "4.5 años",
                "Estudio de sistemas eléctricos, electrónica, telecomunicaciones y control automático.",
            ),
            CareerCandidate::new(
                "Ingeniería Mecánica",
                "Universidad Iberoamericana",
                "Ciudad de México",
                Mechanical,
                "4 años",
                "Diseño y análisis de sistemas mecánicos, termodinámica, materiales y manufactura.",
            ),
            CareerCandidate::new(
                "Ingeniería Industrial",
                "ITAM",
                "Ciudad de México",
                Industrial,
                "4 años",
                "Optimización de procesos, logística, gestión de calidad y administración de operaciones.",
            ),
            CareerCandidate::new(
                "Ingeniería Biomédica",
                "UAM",
                "Ciudad de México",
                Biomedical,
                "4.5 años",
                "Aplicación de principios de ingeniería para resolver problemas médicos y biológicos.",
            ),
            CareerCandidate::new(
                "Ingeniería Ambiental",
                "Universidad Anáhuac",
                "Huixquilucan",
                Environmental,
                "4 años",
                "Desarrollo de soluciones para problemas ambientales, gestión de recursos y energías renovables.",
            ),
            CareerCandidate::new(
                "Ingeniería en IA",
                "ITESM",
                "Monterrey",
                ComputerScience,
                "4.5 años",
                "Desarrollo de sistemas de inteligencia artificial, aprendizaje profundo y procesamiento del lenguaje natural.",
            ),
            CareerCandidate::new(
                "Ingeniería Aeroespacial",
                "UNAM",
                "Ciudad de México",
                Mechanical,
                "5 años",
                "Diseño y desarrollo de aeronaves, satélites y sistemas de propulsión para aplicaciones espaciales.",
            ),
            CareerCandidate::new(
                "Ingeniería en Energías Renovables",
                "Universidad Autónoma de Guadalajara",
                "Guadalajara",
                Environmental,
                "4 años",
                "Diseño e implementación de sistemas de energía solar, eólica y otras fuentes renovables.",
            ),
            CareerCandidate::new(
                "Bioinformática",
                "CINVESTAV",
                "Ciudad de México",
                Biomedical,
                "4 años",
                "Aplicación de métodos computacionales para analizar datos biológicos y genómicos.",
            ),
        ])
    }
}

impl Default for CareerCatalog {
    fn default() -> Self {
        Self::reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_catalog_size_and_keys_unique() {
        let catalog = CareerCatalog::reference();
        assert_eq!(catalog.len(), 12);

        let mut keys: Vec<(&str, &str)> = catalog.as_slice().iter().map(|c| c.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn test_same_name_different_institution_is_different_career() {
        let a = CareerCandidate::new("Ingeniería Civil", "UNAM", "CDMX", EngineeringField::Civil, "4 años", "");
        let b = CareerCandidate::new("Ingeniería Civil", "IPN", "CDMX", EngineeringField::Civil, "4 años", "");
        assert!(!a.is_same_career(&b));
        assert!(a.is_same_career(&a.clone()));
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let catalog = CareerCatalog::reference();
        let found = catalog.find_by_name("ingeniería biomédica").unwrap();
        assert_eq!(found.institution, "UAM");
        assert!(catalog.find_by_name("Ingeniería Naval").is_none());
    }

    #[test]
    fn test_closest_name_suggests_typo_fix() {
        let catalog = CareerCatalog::reference();
        let (career, similarity) = catalog.closest_name("Ingenieria Biomedica").unwrap();
        assert_eq!(career.name, "Ingeniería Biomédica");
        assert!(similarity > 0.8);
    }

    #[test]
    fn test_by_field() {
        let catalog = CareerCatalog::reference();
        assert_eq!(catalog.by_field(EngineeringField::ComputerScience).len(), 2);
        assert!(catalog.by_field(EngineeringField::Civil).is_empty());
    }
}
