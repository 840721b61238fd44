//! Engineering fields and personality traits scored by the vocational quiz

use crate::error::PathfinderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of career domains.
///
/// Declaration order is significant: it is the tie-break order wherever two
/// fields carry the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EngineeringField {
    #[serde(alias = "Mecatrónica")]
    Mechatronics,
    #[serde(alias = "Robótica")]
    Robotics,
    #[serde(alias = "Informática")]
    ComputerScience,
    #[serde(alias = "Ingeniería Eléctrica")]
    Electrical,
    #[serde(alias = "Ingeniería Mecánica")]
    Mechanical,
    #[serde(alias = "Ingeniería Industrial")]
    Industrial,
    #[serde(alias = "Ingeniería Biomédica")]
    Biomedical,
    #[serde(alias = "Ingeniería Ambiental")]
    Environmental,
    #[serde(alias = "Ingeniería Química")]
    Chemical,
    #[serde(alias = "Ingeniería Civil")]
    Civil,
}

/// Closed set of personality characteristics. Declaration order breaks ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalityTrait {
    #[serde(alias = "Analítico")]
    Analytical,
    #[serde(alias = "Creativo")]
    Creative,
    #[serde(alias = "Práctico")]
    Practical,
    #[serde(alias = "Trabajo en Equipo")]
    TeamPlayer,
    #[serde(alias = "Orientado al Detalle")]
    DetailOriented,
    #[serde(alias = "Pensador Global")]
    BigPictureThinker,
    #[serde(alias = "Solucionador de Problemas")]
    ProblemSolver,
    #[serde(alias = "Comunicador")]
    Communicator,
}

impl EngineeringField {
    pub const ALL: [EngineeringField; 10] = [
        EngineeringField::Mechatronics,
        EngineeringField::Robotics,
        EngineeringField::ComputerScience,
        EngineeringField::Electrical,
        EngineeringField::Mechanical,
        EngineeringField::Industrial,
        EngineeringField::Biomedical,
        EngineeringField::Environmental,
        EngineeringField::Chemical,
        EngineeringField::Civil,
    ];

    /// camelCase identifier used in score files
    pub fn key(&self) -> &'static str {
        match self {
            EngineeringField::Mechatronics => "mechatronics",
            EngineeringField::Robotics => "robotics",
            EngineeringField::ComputerScience => "computerScience",
            EngineeringField::Electrical => "electrical",
            EngineeringField::Mechanical => "mechanical",
            EngineeringField::Industrial => "industrial",
            EngineeringField::Biomedical => "biomedical",
            EngineeringField::Environmental => "environmental",
            EngineeringField::Chemical => "chemical",
            EngineeringField::Civil => "civil",
        }
    }

    /// Spanish display label
    pub fn label(&self) -> &'static str {
        match self {
            EngineeringField::Mechatronics => "Mecatrónica",
            EngineeringField::Robotics => "Robótica",
            EngineeringField::ComputerScience => "Informática",
            EngineeringField::Electrical => "Ingeniería Eléctrica",
            EngineeringField::Mechanical => "Ingeniería Mecánica",
            EngineeringField::Industrial => "Ingeniería Industrial",
            EngineeringField::Biomedical => "Ingeniería Biomédica",
            EngineeringField::Environmental => "Ingeniería Ambiental",
            EngineeringField::Chemical => "Ingeniería Química",
            EngineeringField::Civil => "Ingeniería Civil",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            EngineeringField::Mechatronics => "Combina ingeniería mecánica, eléctrica y computacional para crear sistemas inteligentes y robots.",
            EngineeringField::Robotics => "Se centra en el diseño, construcción y programación de robots para diversas aplicaciones.",
            EngineeringField::ComputerScience => "Estudia algoritmos, lenguajes de programación y desarrollo de software.",
            EngineeringField::Electrical => "Trabaja con electricidad, electrónica y electromagnetismo para diversas aplicaciones.",
            EngineeringField::Mechanical => "Diseña y construye sistemas físicos, máquinas y dispositivos.",
            EngineeringField::Industrial => "Optimiza procesos complejos, sistemas u organizaciones.",
            EngineeringField::Biomedical => "Aplica principios de ingeniería a la medicina y biología para la atención médica.",
            EngineeringField::Environmental => "Desarrolla soluciones para la protección ambiental y la sostenibilidad.",
            EngineeringField::Chemical => "Aplica la química a la producción a gran escala de químicos, combustibles y materiales.",
            EngineeringField::Civil => "Diseña y construye infraestructura como edificios, puentes y sistemas de agua.",
        }
    }

    pub fn real_world_example(&self) -> &'static str {
        match self {
            EngineeringField::Mechatronics => "Sistemas domóticos, robots de manufactura avanzada",
            EngineeringField::Robotics => "Vehículos autónomos, robots quirúrgicos, drones",
            EngineeringField::ComputerScience => "Aplicaciones móviles, inteligencia artificial, computación en la nube",
            EngineeringField::Electrical => "Sistemas de energía renovable, microchips, telecomunicaciones",
            EngineeringField::Mechanical => "Diseño automotriz, sistemas HVAC, equipos de fabricación",
            EngineeringField::Industrial => "Optimización de cadenas de suministro, diseño de distribución de fábricas",
            EngineeringField::Biomedical => "Prótesis, dispositivos de imágenes médicas, equipos de diagnóstico",
            EngineeringField::Environmental => "Sistemas de tratamiento de agua, monitoreo de calidad del aire",
            EngineeringField::Chemical => "Farmacéuticos, refinación de petróleo, procesamiento de alimentos",
            EngineeringField::Civil => "Puentes, carreteras, presas, rascacielos, sistemas de suministro de agua",
        }
    }
}

impl PersonalityTrait {
    pub const ALL: [PersonalityTrait; 8] = [
        PersonalityTrait::Analytical,
        PersonalityTrait::Creative,
        PersonalityTrait::Practical,
        PersonalityTrait::TeamPlayer,
        PersonalityTrait::DetailOriented,
        PersonalityTrait::BigPictureThinker,
        PersonalityTrait::ProblemSolver,
        PersonalityTrait::Communicator,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PersonalityTrait::Analytical => "analytical",
            PersonalityTrait::Creative => "creative",
            PersonalityTrait::Practical => "practical",
            PersonalityTrait::TeamPlayer => "teamPlayer",
            PersonalityTrait::DetailOriented => "detailOriented",
            PersonalityTrait::BigPictureThinker => "bigPictureThinker",
            PersonalityTrait::ProblemSolver => "problemSolver",
            PersonalityTrait::Communicator => "communicator",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PersonalityTrait::Analytical => "Analítico",
            PersonalityTrait::Creative => "Creativo",
            PersonalityTrait::Practical => "Práctico",
            PersonalityTrait::TeamPlayer => "Trabajo en Equipo",
            PersonalityTrait::DetailOriented => "Orientado al Detalle",
            PersonalityTrait::BigPictureThinker => "Pensador Global",
            PersonalityTrait::ProblemSolver => "Solucionador de Problemas",
            PersonalityTrait::Communicator => "Comunicador",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonalityTrait::Analytical => "Disfrutas analizando datos y encontrando patrones",
            PersonalityTrait::Creative => "Piensas fuera de la caja y generas soluciones innovadoras",
            PersonalityTrait::Practical => "Te enfocas en enfoques realistas y prácticos",
            PersonalityTrait::TeamPlayer => "Prosperas en entornos colaborativos",
            PersonalityTrait::DetailOriented => "Prestas mucha atención a los pequeños detalles",
            PersonalityTrait::BigPictureThinker => "Ves cómo todo se conecta en un contexto más amplio",
            PersonalityTrait::ProblemSolver => "Disfrutas abordando desafíos complejos",
            PersonalityTrait::Communicator => "Sobresales en explicar ideas complejas con claridad",
        }
    }
}

impl fmt::Display for EngineeringField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EngineeringField {
    type Err = PathfinderError;

    /// Accepts the camelCase key or the Spanish label, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        EngineeringField::ALL
            .iter()
            .copied()
            .find(|f| f.key().to_lowercase() == wanted || f.label().to_lowercase() == wanted)
            .ok_or_else(|| PathfinderError::InvalidInput(format!("Unknown engineering field: {}", s)))
    }
}

impl FromStr for PersonalityTrait {
    type Err = PathfinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        PersonalityTrait::ALL
            .iter()
            .copied()
            .find(|t| t.key().to_lowercase() == wanted || t.label().to_lowercase() == wanted)
            .ok_or_else(|| PathfinderError::InvalidInput(format!("Unknown personality trait: {}", s)))
    }
}
