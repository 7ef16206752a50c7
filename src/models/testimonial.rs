use serde::{Deserialize, Serialize};

/// A client review shown in the testimonials carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub location: String,
    pub rating: u8,
    pub text: String,
    pub date: String,
    pub package: String,
    pub avatar: String,
}

impl Testimonial {
    /// Star row for display, e.g. "★★★★☆".
    pub fn stars(&self) -> String {
        let filled = self.rating.min(5) as usize;
        let mut s = String::with_capacity(5 * '★'.len_utf8());
        for _ in 0..filled {
            s.push('★');
        }
        for _ in filled..5 {
            s.push('☆');
        }
        s
    }
}

/// A raw testimonial row as the gateway returns it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestimonialRow {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "clientname", alias = "clientName")]
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "review", alias = "message")]
    pub text: String,
    #[serde(default)]
    pub date: String,
    #[serde(default, alias = "packagename", alias = "packageName")]
    pub package: String,
    #[serde(default)]
    pub avatar: String,
}

impl TestimonialRow {
    /// Normalize into a canonical [`Testimonial`], or None for rows with an
    /// empty name. Missing ids become `test-N`; missing or zero ratings
    /// default to 5.
    pub fn into_testimonial(self, index: usize) -> Option<Testimonial> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return None;
        }

        let rating = match self.rating {
            Some(r) if r >= 1.0 => (r.round() as u8).min(5),
            _ => 5,
        };
        let id = {
            let id = self.id.trim();
            if id.is_empty() {
                format!("test-{}", index + 1)
            } else {
                id.to_string()
            }
        };

        Some(Testimonial {
            id,
            name,
            location: self.location.trim().to_string(),
            rating,
            text: self.text,
            date: self.date.trim().to_string(),
            package: self.package.trim().to_string(),
            avatar: self.avatar.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(name: &str) -> TestimonialRow {
        TestimonialRow {
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_without_name_are_dropped() {
        assert!(row("").into_testimonial(0).is_none());
        assert!(row("   ").into_testimonial(0).is_none());
        assert!(row("Maria Santos").into_testimonial(0).is_some());
    }

    #[test]
    fn test_rating_defaults_and_clamps() {
        assert_eq!(row("A").into_testimonial(0).unwrap().rating, 5);

        let mut r = row("B");
        r.rating = Some(0.0);
        assert_eq!(r.into_testimonial(0).unwrap().rating, 5);

        let mut r = row("C");
        r.rating = Some(4.0);
        assert_eq!(r.into_testimonial(0).unwrap().rating, 4);

        let mut r = row("D");
        r.rating = Some(9.0);
        assert_eq!(r.into_testimonial(0).unwrap().rating, 5);
    }

    #[test]
    fn test_missing_id_is_generated_from_index() {
        assert_eq!(row("Maria").into_testimonial(2).unwrap().id, "test-3");

        let mut r = row("John");
        r.id = "t-99".to_string();
        assert_eq!(r.into_testimonial(2).unwrap().id, "t-99");
    }

    #[test]
    fn test_stars_rendering() {
        let mut t = row("Maria").into_testimonial(0).unwrap();
        assert_eq!(t.stars(), "★★★★★");
        t.rating = 3;
        assert_eq!(t.stars(), "★★★☆☆");
    }

    #[test]
    fn test_deserialize_clientname_alias() {
        let json = r#"{"clientname": "Maria Santos", "rating": 5, "text": "Great trip!"}"#;
        let t = serde_json::from_str::<TestimonialRow>(json)
            .unwrap()
            .into_testimonial(0)
            .unwrap();
        assert_eq!(t.name, "Maria Santos");
    }
}
