//! Structured resume record consumed by the matching engine
//!
//! Every field that can be absent in the source data is modeled as an
//! `Option` or a defaulted collection, so a partially filled resume never
//! fails deserialization and never panics during analysis.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeData {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    /// Years of experience as entered by the user, e.g. "5"
    #[serde(default)]
    pub years_experience: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: Option<String>,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub institution: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub issuer: Option<String>,
}

impl ResumeData {
    /// Years of experience parsed from the free-text field, 0 when missing
    /// or non-numeric.
    pub fn years_experience(&self) -> u32 {
        self.personal_info
            .years_experience
            .as_deref()
            .and_then(|y| y.trim().parse::<u32>().ok())
            .unwrap_or(0)
    }

    /// Concatenate the searchable text of the resume into a single blob:
    /// summary, experience titles and descriptions, skill names,
    /// certification names, and education degrees and fields.
    pub fn text_blob(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();

        if let Some(summary) = self.personal_info.summary.as_deref() {
            parts.push(summary);
        }

        for entry in &self.experience {
            if let Some(title) = entry.title.as_deref() {
                parts.push(title);
            }
            if let Some(description) = entry.description.as_deref() {
                parts.push(description);
            }
        }

        for skill in &self.skills {
            parts.push(&skill.name);
        }

        for cert in &self.certifications {
            if let Some(name) = cert.name.as_deref() {
                parts.push(name);
            }
        }

        for entry in &self.education {
            if let Some(degree) = entry.degree.as_deref() {
                parts.push(degree);
            }
            if let Some(field) = entry.field.as_deref() {
                parts.push(field);
            }
        }

        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_resume_is_safe() {
        let resume = ResumeData::default();
        assert_eq!(resume.years_experience(), 0);
        assert!(resume.text_blob().is_empty());
    }

    #[test]
    fn test_years_experience_parsing() {
        let mut resume = ResumeData::default();
        resume.personal_info.years_experience = Some("5".to_string());
        assert_eq!(resume.years_experience(), 5);

        resume.personal_info.years_experience = Some(" 12 ".to_string());
        assert_eq!(resume.years_experience(), 12);

        resume.personal_info.years_experience = Some("a few".to_string());
        assert_eq!(resume.years_experience(), 0);
    }

    #[test]
    fn test_text_blob_collects_all_sections() {
        let resume = ResumeData {
            personal_info: PersonalInfo {
                summary: Some("Seasoned backend developer".to_string()),
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                title: Some("Software Engineer".to_string()),
                company: Some("Acme".to_string()),
                description: Some("Built APIs in Rust".to_string()),
            }],
            education: vec![EducationEntry {
                degree: Some("BS".to_string()),
                field: Some("Computer Science".to_string()),
                institution: Some("State University".to_string()),
            }],
            skills: vec![Skill {
                name: "PostgreSQL".to_string(),
                category: None,
                level: None,
            }],
            certifications: vec![Certification {
                name: Some("AWS Certified Developer".to_string()),
                issuer: None,
            }],
        };

        let blob = resume.text_blob();
        assert!(blob.contains("backend developer"));
        assert!(blob.contains("Built APIs in Rust"));
        assert!(blob.contains("PostgreSQL"));
        assert!(blob.contains("AWS Certified Developer"));
        assert!(blob.contains("Computer Science"));
        // Company and institution are not part of the searchable blob
        assert!(!blob.contains("Acme"));
        assert!(!blob.contains("State University"));
    }

    #[test]
    fn test_deserialize_partial_json() {
        let json = r#"{"personalInfo": {"summary": "hi"}, "skills": [{"name": "SQL"}]}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.summary.as_deref(), Some("hi"));
        assert_eq!(resume.skills.len(), 1);
        assert!(resume.experience.is_empty());
    }
}
