//! schema.org JobPosting JSON-LD for job listings

use chrono::{DateTime, NaiveDate};
use ecometric_domain::model::JobPosting;
use ecometric_types::{Error, Result};
use serde_json::{json, Map, Value};

pub const CONFIDENTIAL_EMPLOYER: &str = "Empresa Confidencial";
pub const SCRIPT_ID: &str = "job-posting-schema";

fn iso_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
        .map(|d| d.format("%Y-%m-%d").to_string())
}

/// Build the JobPosting object; `origin` becomes the hiring organization's url
pub fn job_posting_schema(job: &JobPosting, origin: Option<&str>) -> Result<Value> {
    let raw_date = job.date.as_deref().unwrap_or_default();
    let date_posted = iso_date(raw_date)
        .ok_or_else(|| Error::InvalidInput(format!("invalid job date '{}'", raw_date)))?;

    let mut organization = Map::new();
    organization.insert("@type".into(), json!("Organization"));
    organization.insert(
        "name".into(),
        json!(job
            .company_name
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(CONFIDENTIAL_EMPLOYER)),
    );
    if let Some(origin) = origin {
        organization.insert("url".into(), json!(origin));
    }

    let mut schema = json!({
        "@context": "https://schema.org",
        "@type": "JobPosting",
        "title": job.title,
        "description": job.description,
        "datePosted": date_posted,
        "hiringOrganization": organization,
        "jobLocation": {
            "@type": "Place",
            "address": {
                "@type": "PostalAddress",
                "addressCountry": "PT",
                "addressLocality": job.location,
            }
        }
    });

    if let Some(fields) = schema.as_object_mut() {
        if let Some(valid) = job.valid_through.as_deref() {
            let date = iso_date(valid)
                .ok_or_else(|| Error::InvalidInput(format!("invalid validThrough '{}'", valid)))?;
            fields.insert("validThrough".into(), json!(date));
        }
        if let Some(kind) = job.employment_type.as_deref().filter(|s| !s.is_empty()) {
            fields.insert("employmentType".into(), json!(kind));
        }
        match (job.salary_min, job.salary_max) {
            (Some(min), Some(max)) if min != 0.0 && max != 0.0 => {
                fields.insert(
                    "baseSalary".into(),
                    json!({
                        "@type": "MonetaryAmount",
                        "currency": "EUR",
                        "value": {
                            "@type": "QuantitativeValue",
                            "minValue": min,
                            "maxValue": max,
                            "unitText": "YEAR",
                        }
                    }),
                );
            }
            _ => {}
        }
    }
    Ok(schema)
}

/// `<script type="application/ld+json">` element ready for the page head
pub fn job_posting_script(job: &JobPosting, origin: Option<&str>) -> Result<String> {
    let schema = job_posting_schema(job, origin)?;
    let body = serde_json::to_string(&schema)?.replace("</", "<\\/");
    Ok(format!(
        r#"<script type="application/ld+json" id="{}">{}</script>"#,
        SCRIPT_ID, body
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job() -> JobPosting {
        JobPosting {
            title: "Carpinteiro".to_string(),
            description: "Obra em Lisboa".to_string(),
            date: Some("2024-03-10T09:30:00Z".to_string()),
            location: Some("Lisboa".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_schema() {
        let schema = job_posting_schema(&job(), None).unwrap();
        assert_eq!(schema["@type"], "JobPosting");
        assert_eq!(schema["datePosted"], "2024-03-10");
        assert_eq!(schema["hiringOrganization"]["name"], CONFIDENTIAL_EMPLOYER);
        assert!(schema["hiringOrganization"].get("url").is_none());
        assert_eq!(schema["jobLocation"]["address"]["addressCountry"], "PT");
        assert!(schema.get("baseSalary").is_none());
        assert!(schema.get("validThrough").is_none());
    }

    #[test]
    fn test_optional_fields() {
        let posting = JobPosting {
            company_name: Some("Casais".to_string()),
            valid_through: Some("2024-04-30".to_string()),
            employment_type: Some("FULL_TIME".to_string()),
            salary_min: Some(18000.0),
            salary_max: Some(24000.0),
            ..job()
        };
        let schema = job_posting_schema(&posting, Some("https://example.pt")).unwrap();
        assert_eq!(schema["hiringOrganization"]["url"], "https://example.pt");
        assert_eq!(schema["validThrough"], "2024-04-30");
        assert_eq!(schema["employmentType"], "FULL_TIME");
        assert_eq!(schema["baseSalary"]["currency"], "EUR");
        assert_eq!(schema["baseSalary"]["value"]["maxValue"], 24000.0);
    }

    #[test]
    fn test_salary_needs_both_bounds() {
        let posting = JobPosting {
            salary_min: Some(18000.0),
            ..job()
        };
        let schema = job_posting_schema(&posting, None).unwrap();
        assert!(schema.get("baseSalary").is_none());
    }

    #[test]
    fn test_invalid_date() {
        let posting = JobPosting {
            date: Some("amanhã".to_string()),
            ..job()
        };
        assert!(job_posting_schema(&posting, None).is_err());
        assert!(job_posting_schema(&JobPosting { date: None, ..job() }, None).is_err());
    }

    #[test]
    fn test_script_wrapper() {
        let html = job_posting_script(&job(), None).unwrap();
        assert!(html.starts_with(r#"<script type="application/ld+json" id="job-posting-schema">"#));
        assert!(html.ends_with("</script>"));
    }
}
