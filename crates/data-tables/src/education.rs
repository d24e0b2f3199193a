//! Higher-education enrollment figures for Chile
//!
//! Simulated but realistic values used by the education dashboard.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InstitutionKind {
    Universidad,
    Instituto,
    #[serde(rename = "CFT")]
    Cft,
}

impl InstitutionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InstitutionKind::Universidad => "Universidad",
            InstitutionKind::Instituto => "Instituto",
            InstitutionKind::Cft => "CFT",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: u32,
    pub name: &'static str,
    pub kind: InstitutionKind,
    pub region: &'static str,
    pub enrollment_2024: u32,
    pub enrollment_2023: u32,
    /// Percentage, 0-100
    pub retention_rate: u8,
}

impl Institution {
    /// Year-over-year enrollment growth in percent
    pub fn enrollment_growth(&self) -> f64 {
        if self.enrollment_2023 == 0 {
            return 0.0;
        }
        (self.enrollment_2024 as f64 - self.enrollment_2023 as f64) / self.enrollment_2023 as f64
            * 100.0
    }

    pub fn tooltip_label(&self) -> String {
        format!(
            "{} ({}): {} estudiantes",
            self.name,
            self.kind.as_str(),
            self.enrollment_2024
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDemand {
    pub career: &'static str,
    pub area: &'static str,
    pub enrollment: u32,
    /// Percent change against the previous year
    pub growth: f64,
    /// Percentage, 0-100
    pub employability: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentTrend {
    pub year: u16,
    pub total: u32,
    pub universities: u32,
    pub institutes: u32,
    pub cfts: u32,
}

impl EnrollmentTrend {
    pub fn by_kind(&self, kind: InstitutionKind) -> u32 {
        match kind {
            InstitutionKind::Universidad => self.universities,
            InstitutionKind::Instituto => self.institutes,
            InstitutionKind::Cft => self.cfts,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationMetrics {
    pub total_students: u32,
    pub total_institutions: u32,
    pub average_retention_rate: f64,
    pub yearly_growth: f64,
}

pub static INSTITUTIONS: [Institution; 8] = [
    Institution {
        id: 1,
        name: "U. de Chile",
        kind: InstitutionKind::Universidad,
        region: "Metropolitana",
        enrollment_2024: 42500,
        enrollment_2023: 41200,
        retention_rate: 92,
    },
    Institution {
        id: 2,
        name: "PUC",
        kind: InstitutionKind::Universidad,
        region: "Metropolitana",
        enrollment_2024: 31200,
        enrollment_2023: 30800,
        retention_rate: 94,
    },
    Institution {
        id: 3,
        name: "U. de Concepción",
        kind: InstitutionKind::Universidad,
        region: "Biobío",
        enrollment_2024: 28400,
        enrollment_2023: 27900,
        retention_rate: 89,
    },
    Institution {
        id: 4,
        name: "USACH",
        kind: InstitutionKind::Universidad,
        region: "Metropolitana",
        enrollment_2024: 22100,
        enrollment_2023: 21500,
        retention_rate: 87,
    },
    Institution {
        id: 5,
        name: "UTFSM",
        kind: InstitutionKind::Universidad,
        region: "Valparaíso",
        enrollment_2024: 18500,
        enrollment_2023: 18200,
        retention_rate: 88,
    },
    Institution {
        id: 6,
        name: "DUOC UC",
        kind: InstitutionKind::Instituto,
        region: "Metropolitana",
        enrollment_2024: 98000,
        enrollment_2023: 95000,
        retention_rate: 78,
    },
    Institution {
        id: 7,
        name: "INACAP",
        kind: InstitutionKind::Instituto,
        region: "Metropolitana",
        enrollment_2024: 115000,
        enrollment_2023: 112000,
        retention_rate: 75,
    },
    Institution {
        id: 8,
        name: "AIEP",
        kind: InstitutionKind::Instituto,
        region: "Metropolitana",
        enrollment_2024: 72000,
        enrollment_2023: 70500,
        retention_rate: 72,
    },
];

#[rustfmt::skip]
pub static CAREERS_IN_DEMAND: [CareerDemand; 8] = [
    CareerDemand { career: "Ingeniería en Informática", area: "Tecnología", enrollment: 45200, growth: 15.2, employability: 94 },
    CareerDemand { career: "Ciencia de Datos", area: "Tecnología", enrollment: 8500, growth: 42.0, employability: 96 },
    CareerDemand { career: "Enfermería", area: "Salud", enrollment: 38700, growth: 8.5, employability: 91 },
    CareerDemand { career: "Ingeniería Civil", area: "Ingeniería", enrollment: 22100, growth: -2.3, employability: 85 },
    CareerDemand { career: "Administración de Empresas", area: "Negocios", enrollment: 51200, growth: 3.1, employability: 78 },
    CareerDemand { career: "Psicología", area: "Ciencias Sociales", enrollment: 42800, growth: 1.2, employability: 72 },
    CareerDemand { career: "Derecho", area: "Ciencias Sociales", enrollment: 28900, growth: -5.1, employability: 68 },
    CareerDemand { career: "Ingeniería en Automatización", area: "Tecnología", enrollment: 12300, growth: 28.5, employability: 92 },
];

/// Last five academic years
#[rustfmt::skip]
pub static ENROLLMENT_TREND: [EnrollmentTrend; 5] = [
    EnrollmentTrend { year: 2020, total: 1_180_000, universities: 650_000, institutes: 420_000, cfts: 110_000 },
    EnrollmentTrend { year: 2021, total: 1_150_000, universities: 640_000, institutes: 405_000, cfts: 105_000 },
    EnrollmentTrend { year: 2022, total: 1_195_000, universities: 660_000, institutes: 425_000, cfts: 110_000 },
    EnrollmentTrend { year: 2023, total: 1_220_000, universities: 680_000, institutes: 430_000, cfts: 110_000 },
    EnrollmentTrend { year: 2024, total: 1_255_000, universities: 700_000, institutes: 440_000, cfts: 115_000 },
];

pub static EDUCATION_METRICS: EducationMetrics = EducationMetrics {
    total_students: 1_255_000,
    total_institutions: 156,
    average_retention_rate: 81.5,
    yearly_growth: 2.8,
};

pub fn institution(id: u32) -> Option<&'static Institution> {
    INSTITUTIONS.iter().find(|i| i.id == id)
}

pub fn institutions_of_kind(kind: InstitutionKind) -> impl Iterator<Item = &'static Institution> {
    INSTITUTIONS.iter().filter(move |i| i.kind == kind)
}

pub fn careers_in_area(area: &str) -> impl Iterator<Item = &'static CareerDemand> + '_ {
    CAREERS_IN_DEMAND.iter().filter(move |c| c.area == area)
}

pub fn trend_for_year(year: u16) -> Option<&'static EnrollmentTrend> {
    ENROLLMENT_TREND.iter().find(|t| t.year == year)
}
