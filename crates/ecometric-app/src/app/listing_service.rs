//! Listing feeds: load, order by publication date, render as cards

use std::cmp::Ordering;

use ecometric_domain::model::{Feed, Listing};
use ecometric_domain::repository::ListingRepository;
use tracing::{info, warn};

pub const EMPTY_STATE_MESSAGE: &str = "De momento, não há publicações nesta secção.";

const IMAGE_PLACEHOLDER: &str = r#"<div class="image-placeholder"></div>"#;

pub struct ListingService<R: ListingRepository> {
    repo: R,
}

impl<R: ListingRepository> ListingService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Items of a feed, newest first; read failures yield no items
    pub fn load(&self, feed: Feed) -> Vec<Listing> {
        let mut items = match self.repo.find_by_feed(feed) {
            Ok(items) => items,
            Err(e) => {
                warn!(feed = ?feed, error = %e, "failed to load listings");
                return Vec::new();
            }
        };
        sort_by_publication(&mut items);
        info!(feed = ?feed, count = items.len(), "listings loaded");
        items
    }

    /// HTML for the feed's grid container
    pub fn render_feed(&self, feed: Feed) -> String {
        render_grid(&self.load(feed))
    }
}

/// Newest publication first; undated or unparsable dates sink to the end
pub fn sort_by_publication(items: &mut [Listing]) {
    items.sort_by(|a, b| match (a.published_on(), b.published_on()) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}

pub fn render_grid(items: &[Listing]) -> String {
    if items.is_empty() {
        return format!(
            r#"<p class="col-12 text-center lead text-muted mt-5">{}</p>"#,
            EMPTY_STATE_MESSAGE
        );
    }
    items.iter().map(render_card).collect()
}

pub fn render_card(item: &Listing) -> String {
    let title = escape_html(&item.titulo);
    let location = escape_html(&item.localizacao);

    let image = match item.image_url() {
        Some(url) => {
            let url = escape_html(url);
            format!(
                r#"<img src="{url}" class="card-img-top lazy" data-src="{url}" alt="{title}">"#
            )
        }
        None => IMAGE_PLACEHOLDER.to_string(),
    };

    let mut contacts = String::new();
    if let Some(phone) = item.contato.as_deref().filter(|s| !s.trim().is_empty()) {
        let phone = escape_html(phone);
        contacts.push_str(&format!(
            r#"<a href="tel:{phone}" class="contact-icon" title="Contactar por Telefone"><i class="fas fa-phone"></i> <span>{phone}</span></a>"#
        ));
    }
    if let Some(link) = item.link_contato.as_deref().filter(|s| !s.trim().is_empty()) {
        contacts.push_str(&format!(
            r#"<a href="{}" class="contact-icon" title="Contactar por Email"><i class="fas fa-envelope"></i> <span>Email</span></a>"#,
            escape_html(link)
        ));
    }

    let mut html = String::new();
    html.push_str(&format!(
        r#"<div class="col-lg-4 col-md-6 mb-4 announcement-card" data-title="{title}" data-location="{location}">"#
    ));
    html.push_str(r#"<div class="card h-100">"#);
    html.push_str(&format!(
        r#"<div class="card-number">{}</div>"#,
        escape_html(&item.id_label())
    ));
    html.push_str(&image);
    html.push_str(r#"<div class="card-body d-flex flex-column">"#);
    html.push_str(&format!(r#"<h5 class="card-title">{title}</h5>"#));
    html.push_str(&format!(
        r#"<h6 class="card-subtitle mb-2 text-muted"><i class="fas fa-map-marker-alt mr-2"></i> {location}</h6>"#
    ));
    html.push_str(&format!(
        r#"<p class="card-text flex-grow-1">{}</p>"#,
        escape_html(&item.descricao)
    ));
    html.push_str(&format!(
        r#"<div class="card-contact-icons mt-auto">{contacts}</div>"#
    ));
    html.push_str("</div></div></div>");
    html
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecometric_domain::model::ListingImage;
    use ecometric_types::Error;

    struct StaticRepo(Result<Vec<Listing>, ()>);

    impl ListingRepository for StaticRepo {
        fn find_by_feed(&self, _feed: Feed) -> Result<Vec<Listing>, Error> {
            self.0
                .clone()
                .map_err(|_| Error::FileNotFound("/_dados/empregos.json".to_string()))
        }
    }

    fn listing(title: &str, date: Option<&str>) -> Listing {
        Listing {
            titulo: title.to_string(),
            data_publicacao: date.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_sort_newest_first_undated_last() {
        let mut items = vec![
            listing("old", Some("2023-01-01")),
            listing("undated", None),
            listing("new", Some("2024-06-01")),
        ];
        sort_by_publication(&mut items);
        let titles: Vec<_> = items.iter().map(|i| i.titulo.as_str()).collect();
        assert_eq!(titles, vec!["new", "old", "undated"]);
    }

    #[test]
    fn test_failed_load_renders_empty_state() {
        let service = ListingService::new(StaticRepo(Err(())));
        assert!(service.load(Feed::Jobs).is_empty());
        assert!(service.render_feed(Feed::Jobs).contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn test_empty_feed_renders_empty_state() {
        let service = ListingService::new(StaticRepo(Ok(vec![])));
        assert!(service.render_feed(Feed::Housing).contains(EMPTY_STATE_MESSAGE));
    }

    #[test]
    fn test_card_with_gallery_image_and_contacts() {
        let item = Listing {
            titulo: "T2 renovado".to_string(),
            localizacao: "Braga".to_string(),
            imagens: vec![ListingImage {
                imagem_url: Some("/img/t2.jpg".to_string()),
            }],
            contato: Some("912345678".to_string()),
            link_contato: Some("mailto:a@b.pt".to_string()),
            ..Default::default()
        };
        let html = render_card(&item);
        assert!(html.contains(r#"class="card-img-top lazy" data-src="/img/t2.jpg""#));
        assert!(html.contains(r#"href="tel:912345678""#));
        assert!(html.contains(r#"href="mailto:a@b.pt""#));
        assert!(!html.contains("image-placeholder"));
    }

    #[test]
    fn test_card_without_image_or_contacts() {
        let html = render_card(&listing("Doação de roupa", None));
        assert!(html.contains(IMAGE_PLACEHOLDER));
        assert!(!html.contains("tel:"));
        assert!(!html.contains("Email"));
    }

    #[test]
    fn test_markup_is_escaped() {
        let html = render_card(&listing("<b>x</b> & \"y\"", None));
        assert!(html.contains("&lt;b&gt;x&lt;/b&gt; &amp; &quot;y&quot;"));
        assert!(!html.contains("<b>x</b>"));
    }
}
