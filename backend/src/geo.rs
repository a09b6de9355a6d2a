//! Map markers for geo-tagged posts.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::Post;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub user: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Corners as `[lat, lon]`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south_west: [f64; 2],
    pub north_east: [f64; 2],
}

impl Bounds {
    fn around(lat: f64, lon: f64) -> Self {
        Self {
            south_west: [lat, lon],
            north_east: [lat, lon],
        }
    }

    fn extend(&mut self, lat: f64, lon: f64) {
        self.south_west[0] = self.south_west[0].min(lat);
        self.south_west[1] = self.south_west[1].min(lon);
        self.north_east[0] = self.north_east[0].max(lat);
        self.north_east[1] = self.north_east[1].max(lon);
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Default)]
pub struct MapView {
    pub markers: Vec<Marker>,
    pub bounds: Option<Bounds>,
}

impl MapView {
    /// One marker per post that has coordinates; bounds cover exactly those.
    pub fn from_posts(posts: Vec<Post>) -> Self {
        let mut view = MapView::default();

        for post in posts {
            let Some(c) = post.coordinates else {
                continue;
            };

            match view.bounds.as_mut() {
                Some(bounds) => bounds.extend(c.lat, c.lon),
                None => view.bounds = Some(Bounds::around(c.lat, c.lon)),
            }

            view.markers.push(Marker {
                lat: c.lat,
                lon: c.lon,
                user: post.user,
                text: post.text,
                created_at: post.created_at,
            });
        }

        view
    }
}
