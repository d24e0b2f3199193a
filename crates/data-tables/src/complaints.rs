//! Education complaint aggregates for 2025
//!
//! Source: Superintendencia de Educación de Chile, publication of 2025-09-30.
//! Rows were aggregated from the published CSV outside this crate.

use serde::Serialize;

/// Chilean administrative region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Region {
    pub code: u8,
    pub name: &'static str,
}

/// Processing status of a complaint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplaintStatus {
    pub code: u8,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintsByRegion {
    pub region: &'static str,
    pub code: u8,
    pub total: u32,
}

impl ComplaintsByRegion {
    /// Tooltip text for a bar or map region
    pub fn tooltip_label(&self) -> String {
        format!("Región: {}, Total: {}", self.region, self.total)
    }
}

/// Complaints grouped by domain area ("ámbito")
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintsByAmbit {
    pub ambit: &'static str,
    pub total: u32,
    pub percentage: f64,
}

impl ComplaintsByAmbit {
    pub fn tooltip_label(&self) -> String {
        format!("{}: {} ({:.1}%)", self.ambit, self.total, self.percentage)
    }
}

/// Complaints grouped by specific topic ("tema")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintsByTopic {
    pub topic: &'static str,
    pub ambit: &'static str,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintsByStatus {
    pub status: &'static str,
    pub code: u8,
    pub total: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintsByMonth {
    pub month: u8,
    pub month_name: &'static str,
    pub total: u32,
}

/// Headline figures shown above the complaint charts
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintsSummary {
    pub total_complaints: u32,
    pub in_process: u32,
    pub closed: u32,
    pub daily_average: u32,
    pub top_region: &'static str,
    pub top_topic: &'static str,
    pub convivencia_percentage: f64,
}

/// Chart color assigned to a category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryColor {
    pub label: &'static str,
    pub color: &'static str,
}

#[rustfmt::skip]
pub static REGIONS: [Region; 16] = [
    Region { code: 1, name: "Tarapacá" },
    Region { code: 2, name: "Antofagasta" },
    Region { code: 3, name: "Atacama" },
    Region { code: 4, name: "Coquimbo" },
    Region { code: 5, name: "Valparaíso" },
    Region { code: 6, name: "O'Higgins" },
    Region { code: 7, name: "Maule" },
    Region { code: 8, name: "Biobío" },
    Region { code: 9, name: "Araucanía" },
    Region { code: 10, name: "Los Lagos" },
    Region { code: 11, name: "Aysén" },
    Region { code: 12, name: "Magallanes" },
    Region { code: 13, name: "Metropolitana" },
    Region { code: 14, name: "Los Ríos" },
    Region { code: 15, name: "Arica y Parinacota" },
    Region { code: 16, name: "Ñuble" },
];

#[rustfmt::skip]
pub static COMPLAINT_STATUSES: [ComplaintStatus; 4] = [
    ComplaintStatus { code: 1, name: "Cerrada" },
    ComplaintStatus { code: 2, name: "En proceso" },
    ComplaintStatus { code: 3, name: "Derivada" },
    ComplaintStatus { code: 4, name: "Otros" },
];

/// Month names indexed by month number; index 0 is unused
pub static MONTH_NAMES: [&str; 13] = [
    "",
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

#[rustfmt::skip]
pub static COMPLAINTS_BY_REGION: [ComplaintsByRegion; 16] = [
    ComplaintsByRegion { region: "Metropolitana", code: 13, total: 5842 },
    ComplaintsByRegion { region: "Biobío", code: 8, total: 1523 },
    ComplaintsByRegion { region: "Valparaíso", code: 5, total: 1287 },
    ComplaintsByRegion { region: "Los Lagos", code: 10, total: 876 },
    ComplaintsByRegion { region: "O'Higgins", code: 6, total: 654 },
    ComplaintsByRegion { region: "Araucanía", code: 9, total: 612 },
    ComplaintsByRegion { region: "Maule", code: 7, total: 589 },
    ComplaintsByRegion { region: "Coquimbo", code: 4, total: 534 },
    ComplaintsByRegion { region: "Los Ríos", code: 14, total: 423 },
    ComplaintsByRegion { region: "Antofagasta", code: 2, total: 398 },
    ComplaintsByRegion { region: "Ñuble", code: 16, total: 376 },
    ComplaintsByRegion { region: "Tarapacá", code: 1, total: 321 },
    ComplaintsByRegion { region: "Arica y Parinacota", code: 15, total: 287 },
    ComplaintsByRegion { region: "Atacama", code: 3, total: 234 },
    ComplaintsByRegion { region: "Magallanes", code: 12, total: 156 },
    ComplaintsByRegion { region: "Aysén", code: 11, total: 112 },
];

#[rustfmt::skip]
pub static COMPLAINTS_BY_AMBIT: [ComplaintsByAmbit; 7] = [
    ComplaintsByAmbit { ambit: "Convivencia", total: 9876, percentage: 66.1 },
    ComplaintsByAmbit { ambit: "Gestión Adm.", total: 1823, percentage: 12.2 },
    ComplaintsByAmbit { ambit: "Seg. e Higiene", total: 1456, percentage: 9.8 },
    ComplaintsByAmbit { ambit: "Infraestructura", total: 876, percentage: 5.9 },
    ComplaintsByAmbit { ambit: "Gestión Pedag.", total: 534, percentage: 3.6 },
    ComplaintsByAmbit { ambit: "Admisión", total: 234, percentage: 1.6 },
    ComplaintsByAmbit { ambit: "Otros", total: 134, percentage: 0.9 },
];

/// Top ten topics
#[rustfmt::skip]
pub static COMPLAINTS_BY_TOPIC: [ComplaintsByTopic; 10] = [
    ComplaintsByTopic { topic: "Maltrato entre estudiantes", ambit: "Convivencia", total: 4523 },
    ComplaintsByTopic { topic: "Maltrato de adulto a estudiante", ambit: "Convivencia", total: 2134 },
    ComplaintsByTopic { topic: "Discriminación", ambit: "Convivencia", total: 1567 },
    ComplaintsByTopic { topic: "Situaciones de connotación sexual", ambit: "Convivencia", total: 987 },
    ComplaintsByTopic { topic: "Personal del establecimiento", ambit: "Gestión", total: 876 },
    ComplaintsByTopic { topic: "Procedimientos de higiene", ambit: "Seguridad", total: 765 },
    ComplaintsByTopic { topic: "Infraestructura deficiente", ambit: "Infraestructura", total: 654 },
    ComplaintsByTopic { topic: "Medidas disciplinarias", ambit: "Convivencia", total: 543 },
    ComplaintsByTopic { topic: "Accidentes de estudiantes", ambit: "Seguridad", total: 456 },
    ComplaintsByTopic { topic: "Proceso de admisión", ambit: "Admisión", total: 234 },
];

#[rustfmt::skip]
pub static COMPLAINTS_BY_STATUS: [ComplaintsByStatus; 4] = [
    ComplaintsByStatus { status: "Cerrada", code: 1, total: 8765 },
    ComplaintsByStatus { status: "En proceso", code: 2, total: 4234 },
    ComplaintsByStatus { status: "Derivada", code: 3, total: 1234 },
    ComplaintsByStatus { status: "Otros", code: 4, total: 700 },
];

/// January through September 2025
#[rustfmt::skip]
pub static COMPLAINTS_BY_MONTH: [ComplaintsByMonth; 9] = [
    ComplaintsByMonth { month: 1, month_name: "Enero", total: 1234 },
    ComplaintsByMonth { month: 2, month_name: "Febrero", total: 987 },
    ComplaintsByMonth { month: 3, month_name: "Marzo", total: 1567 },
    ComplaintsByMonth { month: 4, month_name: "Abril", total: 2345 },
    ComplaintsByMonth { month: 5, month_name: "Mayo", total: 2123 },
    ComplaintsByMonth { month: 6, month_name: "Junio", total: 1876 },
    ComplaintsByMonth { month: 7, month_name: "Julio", total: 1654 },
    ComplaintsByMonth { month: 8, month_name: "Agosto", total: 1432 },
    ComplaintsByMonth { month: 9, month_name: "Septiembre", total: 1715 },
];

pub static COMPLAINTS_SUMMARY: ComplaintsSummary = ComplaintsSummary {
    total_complaints: 14933,
    in_process: 4234,
    closed: 8765,
    daily_average: 55,
    top_region: "Metropolitana",
    top_topic: "Maltrato entre estudiantes",
    convivencia_percentage: 66.1,
};

#[rustfmt::skip]
pub static AMBIT_COLORS: [CategoryColor; 7] = [
    CategoryColor { label: "Convivencia", color: "#ef4444" },
    CategoryColor { label: "Gestión Adm.", color: "#f97316" },
    CategoryColor { label: "Seg. e Higiene", color: "#eab308" },
    CategoryColor { label: "Infraestructura", color: "#22c55e" },
    CategoryColor { label: "Gestión Pedag.", color: "#06b6d4" },
    CategoryColor { label: "Admisión", color: "#8b5cf6" },
    CategoryColor { label: "Otros", color: "#6b7280" },
];

#[rustfmt::skip]
pub static STATUS_COLORS: [CategoryColor; 4] = [
    CategoryColor { label: "Cerrada", color: "#22c55e" },
    CategoryColor { label: "En proceso", color: "#f97316" },
    CategoryColor { label: "Derivada", color: "#06b6d4" },
    CategoryColor { label: "Otros", color: "#6b7280" },
];

pub fn region_name(code: u8) -> Option<&'static str> {
    REGIONS.iter().find(|r| r.code == code).map(|r| r.name)
}

pub fn status_name(code: u8) -> Option<&'static str> {
    COMPLAINT_STATUSES
        .iter()
        .find(|s| s.code == code)
        .map(|s| s.name)
}

/// Spanish month name for `month` in 1..=12
pub fn month_name(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => MONTH_NAMES.get(month as usize).copied(),
        _ => None,
    }
}

pub fn ambit_color(ambit: &str) -> Option<&'static str> {
    find_color(&AMBIT_COLORS, ambit)
}

pub fn status_color(status: &str) -> Option<&'static str> {
    find_color(&STATUS_COLORS, status)
}

fn find_color(colors: &[CategoryColor], label: &str) -> Option<&'static str> {
    colors.iter().find(|c| c.label == label).map(|c| c.color)
}

pub fn region_row(code: u8) -> Option<&'static ComplaintsByRegion> {
    COMPLAINTS_BY_REGION.iter().find(|row| row.code == code)
}

pub fn total_by_region() -> u32 {
    COMPLAINTS_BY_REGION.iter().map(|row| row.total).sum()
}

pub fn total_by_ambit() -> u32 {
    COMPLAINTS_BY_AMBIT.iter().map(|row| row.total).sum()
}

pub fn total_by_status() -> u32 {
    COMPLAINTS_BY_STATUS.iter().map(|row| row.total).sum()
}

pub fn total_by_month() -> u32 {
    COMPLAINTS_BY_MONTH.iter().map(|row| row.total).sum()
}

/// Topics belonging to `ambit`, in table order
pub fn topics_for_ambit(ambit: &str) -> impl Iterator<Item = &'static ComplaintsByTopic> + '_ {
    COMPLAINTS_BY_TOPIC.iter().filter(move |row| row.ambit == ambit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_lookup() {
        assert_eq!(region_name(13), Some("Metropolitana"));
        assert_eq!(region_name(16), Some("Ñuble"));
        assert_eq!(region_name(0), None);
        assert_eq!(region_name(17), None);
    }

    #[test]
    fn test_status_and_month_lookup() {
        assert_eq!(status_name(2), Some("En proceso"));
        assert_eq!(status_name(5), None);
        assert_eq!(month_name(9), Some("Septiembre"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn test_totals() {
        assert_eq!(total_by_ambit(), COMPLAINTS_SUMMARY.total_complaints);
        assert_eq!(total_by_status(), COMPLAINTS_SUMMARY.total_complaints);
        assert_eq!(total_by_month(), COMPLAINTS_SUMMARY.total_complaints);
        assert_eq!(total_by_region(), 14224);
    }

    #[test]
    fn test_region_tooltip_label() {
        let row = region_row(13).unwrap();
        assert_eq!(row.tooltip_label(), "Región: Metropolitana, Total: 5842");
    }

    #[test]
    fn test_colors() {
        assert_eq!(ambit_color("Convivencia"), Some("#ef4444"));
        assert_eq!(status_color("Derivada"), Some("#06b6d4"));
        assert_eq!(ambit_color("Desconocido"), None);
    }

    #[test]
    fn test_topics_for_ambit() {
        let topics: Vec<_> = topics_for_ambit("Seguridad").map(|t| t.topic).collect();
        assert_eq!(
            topics,
            vec!["Procedimientos de higiene", "Accidentes de estudiantes"]
        );
    }

    #[test]
    fn test_summary_matches_status_rows() {
        let closed = COMPLAINTS_BY_STATUS.iter().find(|s| s.code == 1).unwrap();
        let in_process = COMPLAINTS_BY_STATUS.iter().find(|s| s.code == 2).unwrap();
        assert_eq!(closed.total, COMPLAINTS_SUMMARY.closed);
        assert_eq!(in_process.total, COMPLAINTS_SUMMARY.in_process);
    }
}
