//! Portfolio profile and project list

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Self-assessed level, 0-100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    pub name: &'static str,
    pub icon: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub email: &'static str,
    pub linkedin: &'static str,
    pub github: &'static str,
    pub bio: &'static str,
    pub skills: &'static [Skill],
    pub skill_categories: &'static [SkillCategory],
}

impl Profile {
    pub fn skill(&self, name: &str) -> Option<&'static Skill> {
        self.skills.iter().find(|s| s.name == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    DataViz,
    DataEng,
    Web,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub category: ProjectCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<&'static str>,
    pub featured: bool,
}

impl Project {
    pub fn uses(&self, technology: &str) -> bool {
        self.technologies.iter().any(|t| *t == technology)
    }
}

#[rustfmt::skip]
static SKILLS: [Skill; 8] = [
    Skill { name: "Python", icon: "🐍", level: 60 },
    Skill { name: "SQL", icon: "🗃️", level: 80 },
    Skill { name: "Svelte", icon: "🔥", level: 50 },
    Skill { name: "D3.js", icon: "📊", level: 40 },
    Skill { name: "Power BI", icon: "📈", level: 60 },
    Skill { name: "ETL/ELT", icon: "⚙️", level: 70 },
    Skill { name: "React", icon: "⚛️", level: 70 },
    Skill { name: "Observable Plot", icon: "📉", level: 40 },
];

static SKILL_CATEGORIES: [SkillCategory; 4] = [
    SkillCategory {
        name: "Data Engineering",
        icon: "🔧",
        skills: &["Python", "SQL", "Apache Spark", "Airflow", "dbt"],
    },
    SkillCategory {
        name: "Visualization",
        icon: "📊",
        skills: &["D3.js", "Observable Plot", "Power BI", "Looker Studio"],
    },
    SkillCategory {
        name: "Frontend",
        icon: "💻",
        skills: &["Svelte", "React", "TypeScript", "HTML/CSS"],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        icon: "☁️",
        skills: &["Azure", "GCP", "Git"],
    },
];

pub static PROFILE: Profile = Profile {
    name: "Daniel Andres Marcel Rivera",
    short_name: "Daniel Marcel",
    title: "Ingeniero en Informática",
    subtitle: "Especializándose en Ingeniería de Datos",
    email: "danielmarcelrivera@gmail.com",
    linkedin: "https://www.linkedin.com/in/danielmarcel/",
    github: "https://github.com/danielmarcel",
    bio: "Ingeniero en Informática con pasión por transformar datos en insights accionables. \
          Actualmente especializándome en Ingeniería de Datos, con experiencia en ETL, visualización \
          y desarrollo de pipelines de datos.",
    skills: &SKILLS,
    skill_categories: &SKILL_CATEGORIES,
};

pub static PROJECTS: [Project; 3] = [
    Project {
        id: "dashboard-educacion",
        title: "Dashboard de Educación Superior",
        description: "Visualización interactiva de datos educativos con Svelte, D3.js y Observable Plot",
        long_description: "Dashboard completo que muestra métricas de educación superior en Chile, \
            incluyendo matrículas por carrera, tendencias temporales y empleabilidad. Desarrollado como \
            proyecto educativo para demostrar el uso de Svelte con visualizaciones de datos.",
        technologies: &["Svelte", "D3.js", "Observable Plot", "TypeScript"],
        category: ProjectCategory::DataViz,
        image: None,
        link: Some("/"),
        github: None,
        featured: true,
    },
    Project {
        id: "comparacion-d3-plot",
        title: "D3.js vs Observable Plot",
        description: "Comparación interactiva entre enfoques imperativo y declarativo de visualización",
        long_description: "Página educativa que compara D3.js con Observable Plot, mostrando las \
            diferencias entre el enfoque imperativo y declarativo para crear visualizaciones de datos.",
        technologies: &["D3.js", "Observable Plot", "Svelte"],
        category: ProjectCategory::DataViz,
        image: None,
        link: Some("/comparison"),
        github: None,
        featured: true,
    },
    Project {
        id: "denuncias-educacion",
        title: "Análisis de Denuncias Educación",
        description: "Visualización de datos de denuncias del sistema educacional chileno",
        long_description: "Análisis exploratorio de datos de denuncias recibidas por la Superintendencia \
            de Educación, incluyendo distribución por región, tipo de denuncia, estado y tendencias temporales.",
        technologies: &["Svelte", "D3.js", "Python", "Pandas"],
        category: ProjectCategory::DataEng,
        image: None,
        link: Some("/denuncias"),
        github: None,
        featured: true,
    },
];

pub fn project(id: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == id)
}

pub fn featured_projects() -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(|p| p.featured)
}

pub fn projects_in_category(category: ProjectCategory) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| p.category == category)
}
