//! Published listings (donations, jobs, services, housing)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Content feeds published on the site
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feed {
    Donations,
    Jobs,
    Services,
    Housing,
}

impl Feed {
    /// Site-relative path of the feed document
    pub fn path(&self) -> &'static str {
        match self {
            Feed::Donations => "/_dados/doacoes.json",
            Feed::Jobs => "/_dados/empregos.json",
            Feed::Services => "/_dados/servicos.json",
            Feed::Housing => "/_dados/habitacao.json",
        }
    }

    /// Name of the array field holding the items
    pub fn data_key(&self) -> &'static str {
        match self {
            Feed::Donations => "pedidos",
            Feed::Jobs => "vagas",
            Feed::Services => "servicos",
            Feed::Housing => "anuncios",
        }
    }

    pub fn container_id(&self) -> &'static str {
        match self {
            Feed::Donations => "announcements-grid",
            Feed::Jobs => "jobs-grid",
            Feed::Services => "services-grid",
            Feed::Housing => "housing-grid",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    #[serde(default)]
    pub imagem_url: Option<String>,
}

/// A single published card; field names follow the feed documents
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Listing {
    pub id: Option<serde_json::Value>,
    pub titulo: String,
    pub localizacao: String,
    pub descricao: String,
    pub imagem: Option<String>,
    pub logo_empresa: Option<String>,
    pub imagens: Vec<ListingImage>,
    pub contato: Option<String>,
    pub link_contato: Option<String>,
    pub data_publicacao: Option<String>,
}

impl Listing {
    /// First available image: own image, company logo, then gallery
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.imagem.as_deref())
            .or_else(|| non_empty(self.logo_empresa.as_deref()))
            .or_else(|| {
                self.imagens
                    .first()
                    .and_then(|img| non_empty(img.imagem_url.as_deref()))
            })
    }

    /// Publication date, accepting plain dates or RFC 3339 timestamps
    pub fn published_on(&self) -> Option<NaiveDate> {
        let raw = self.data_publicacao.as_deref()?.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| {
                chrono::DateTime::parse_from_rfc3339(raw)
                    .ok()
                    .map(|dt| dt.date_naive())
            })
    }

    pub fn id_label(&self) -> String {
        match &self.id {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}

/// Job advert data used for schema.org JobPosting markup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
    pub date: Option<String>,
    pub company_name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "validThrough")]
    pub valid_through: Option<String>,
    #[serde(rename = "employmentType")]
    pub employment_type: Option<String>,
    pub salary_min: Option<f64>,
    pub salary_max: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_fallback_order() {
        let mut listing = Listing {
            imagens: vec![ListingImage {
                imagem_url: Some("gallery.jpg".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(listing.image_url(), Some("gallery.jpg"));
        listing.logo_empresa = Some("logo.png".to_string());
        assert_eq!(listing.image_url(), Some("logo.png"));
        listing.imagem = Some("main.jpg".to_string());
        assert_eq!(listing.image_url(), Some("main.jpg"));
    }

    #[test]
    fn test_no_image() {
        let listing = Listing::default();
        assert!(listing.image_url().is_none());
    }

    #[test]
    fn test_published_on_formats() {
        let mut listing = Listing {
            data_publicacao: Some("2024-05-01".to_string()),
            ..Default::default()
        };
        assert_eq!(listing.published_on(), NaiveDate::from_ymd_opt(2024, 5, 1));
        listing.data_publicacao = Some("2024-05-02T10:00:00Z".to_string());
        assert_eq!(listing.published_on(), NaiveDate::from_ymd_opt(2024, 5, 2));
        listing.data_publicacao = Some("soon".to_string());
        assert!(listing.published_on().is_none());
    }

    #[test]
    fn test_id_label() {
        let listing: Listing = serde_json::from_str(r#"{"id": 7, "titulo": "x"}"#).unwrap();
        assert_eq!(listing.id_label(), "7");
        assert_eq!(Listing::default().id_label(), "");
    }
}
