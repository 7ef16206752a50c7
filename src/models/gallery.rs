use serde::{Deserialize, Serialize};

use crate::utils::{drive_thumbnail_url, split_list};

/// A past-trip photo set shown in the gallery tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub destination: String,
    pub tour_type: String,
    pub year: String,
    pub images: Vec<String>,
    pub thumbnail: String,
    pub description: String,
    pub client_name: String,
}

impl GalleryItem {
    pub fn photo_count(&self) -> usize {
        self.images.len()
    }
}

/// The image column arrives either as a JSON array (current gateway) or a
/// single delimited string (older exports).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ImageField {
    List(Vec<String>),
    Single(String),
}

impl Default for ImageField {
    fn default() -> Self {
        ImageField::Single(String::new())
    }
}

impl ImageField {
    fn into_urls(self) -> Vec<String> {
        let tokens = match self {
            ImageField::List(list) => list,
            ImageField::Single(s) => split_list(&s),
        };
        tokens
            .iter()
            .map(|t| drive_thumbnail_url(t))
            .filter(|u| !u.is_empty())
            .collect()
    }
}

/// A raw gallery row as the gateway returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GalleryRow {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default, alias = "tourtype", alias = "tourType", alias = "TourType")]
    pub tour_type: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, alias = "imageurl", alias = "image")]
    pub images: ImageField,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "clientname", alias = "clientName")]
    pub client_name: String,
}

impl GalleryRow {
    /// Normalize into a canonical [`GalleryItem`], or None when no image URL
    /// survives cleanup. `index` seeds the fallback id for rows without one.
    pub fn into_item(self, index: usize) -> Option<GalleryItem> {
        let images = self.images.into_urls();
        if images.is_empty() {
            return None;
        }

        let title = self.title.trim().to_string();
        let thumbnail = {
            let explicit = drive_thumbnail_url(&self.thumbnail);
            if explicit.is_empty() {
                images[0].clone()
            } else {
                explicit
            }
        };
        let client_name = {
            let name = self.client_name.trim();
            if name.is_empty() {
                title.clone()
            } else {
                name.to_string()
            }
        };
        let id = {
            let id = self.id.trim();
            if id.is_empty() {
                format!("gal-{}", index + 1)
            } else {
                id.to_string()
            }
        };

        Some(GalleryItem {
            id,
            title,
            destination: self.destination.trim().to_string(),
            tour_type: self.tour_type.trim().to_string(),
            year: self.year.trim().to_string(),
            images,
            thumbnail,
            description: self.description,
            client_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(title: &str, images: ImageField) -> GalleryRow {
        GalleryRow {
            title: title.to_string(),
            images,
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_without_images_are_dropped() {
        let r = row("Boracay 2024", ImageField::Single(" , | ".to_string()));
        assert!(r.into_item(0).is_none());

        let r = row("Boracay 2024", ImageField::List(vec![]));
        assert!(r.into_item(0).is_none());
    }

    #[test]
    fn test_delimited_string_images_are_split() {
        let r = row(
            "Boracay 2024",
            ImageField::Single("https://a.example/1.jpg | https://a.example/2.jpg".to_string()),
        );
        let item = r.into_item(0).unwrap();
        assert_eq!(item.images.len(), 2);
        assert_eq!(item.thumbnail, "https://a.example/1.jpg");
    }

    #[test]
    fn test_explicit_thumbnail_wins_over_first_image() {
        let mut r = row(
            "Boracay 2024",
            ImageField::List(vec!["https://a.example/1.jpg".to_string()]),
        );
        r.thumbnail = "https://a.example/cover.jpg".to_string();
        assert_eq!(r.into_item(0).unwrap().thumbnail, "https://a.example/cover.jpg");
    }

    #[test]
    fn test_client_name_falls_back_to_title() {
        let r = row(
            "Palawan Expedition",
            ImageField::List(vec!["https://a.example/1.jpg".to_string()]),
        );
        assert_eq!(r.into_item(0).unwrap().client_name, "Palawan Expedition");
    }

    #[test]
    fn test_missing_id_is_generated_from_index() {
        let r = row(
            "Palawan Expedition",
            ImageField::List(vec!["https://a.example/1.jpg".to_string()]),
        );
        assert_eq!(r.into_item(4).unwrap().id, "gal-5");
    }

    #[test]
    fn test_deserialize_array_and_string_forms() {
        let json = r#"{"id": "g1", "title": "Trip", "images": ["https://a.example/1.jpg"]}"#;
        let item = serde_json::from_str::<GalleryRow>(json)
            .unwrap()
            .into_item(0)
            .unwrap();
        assert_eq!(item.photo_count(), 1);

        let json = r#"{"id": "g2", "title": "Trip", "imageurl": "https://a.example/1.jpg, https://a.example/2.jpg"}"#;
        let item = serde_json::from_str::<GalleryRow>(json)
            .unwrap()
            .into_item(0)
            .unwrap();
        assert_eq!(item.photo_count(), 2);
    }
}
