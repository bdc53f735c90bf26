/// A scene marker discovered in the scrollable container, in document order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneMarker {
    pub id: String,
    /// Optional hold-duration override carried on the marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
}

impl SceneMarker {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            duration_ms: None,
        }
    }
}

/// The scrollable container boundary.
///
/// The engine owns no surface of its own; an embedder adapts its real
/// container (a DOM element, a native scroll view) behind this trait. All
/// offsets are in pixels from the top of the scrollable content.
///
/// Layout is treated as live: the driver re-queries `marker_offset` every
/// tick, so implementations should answer from current layout rather than a
/// cache. A detached or unmounted container is modeled by not attaching a
/// host at all, never by panicking here.
pub trait ScrollHost {
    /// Visible height of the container in pixels.
    fn viewport_height(&self) -> f64;

    /// Total scrollable content height in pixels.
    fn content_height(&self) -> f64;

    /// Current scroll offset.
    fn scroll_top(&self) -> f64;

    /// Write the scroll offset. Implementations clamp to the valid range.
    fn set_scroll_top(&mut self, offset: f64);

    /// Maximum scrollable offset, floored at zero for short content.
    fn max_scroll(&self) -> f64 {
        (self.content_height() - self.viewport_height()).max(0.0)
    }

    /// Scene markers present in the container, in document order.
    fn scene_markers(&self) -> Vec<SceneMarker>;

    /// Resolve a marker's cumulative vertical offset from live layout, or
    /// `None` when no matching marker exists.
    fn marker_offset(&self, marker: &str) -> Option<f64>;
}

/// In-memory host with a fixed layout.
///
/// Reference implementation used by tests, demos, and the CLI's headless
/// playback: each scene is laid out as one viewport-height section, which is
/// exactly the invitation template contract.
#[derive(Clone, Debug)]
pub struct StaticHost {
    viewport_height: f64,
    markers: Vec<(SceneMarker, f64)>,
    content_height: f64,
    scroll_top: f64,
}

impl StaticHost {
    /// Lay out `ids` as consecutive viewport-height sections.
    pub fn from_scene_ids<I, S>(viewport_height: f64, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let markers: Vec<(SceneMarker, f64)> = ids
            .into_iter()
            .enumerate()
            .map(|(i, id)| (SceneMarker::new(id), i as f64 * viewport_height))
            .collect();
        let content_height = (markers.len().max(1)) as f64 * viewport_height;
        Self {
            viewport_height,
            markers,
            content_height,
            scroll_top: 0.0,
        }
    }

    /// Host with explicit marker offsets and content height.
    pub fn with_layout(
        viewport_height: f64,
        content_height: f64,
        markers: Vec<(SceneMarker, f64)>,
    ) -> Self {
        Self {
            viewport_height,
            markers,
            content_height,
            scroll_top: 0.0,
        }
    }
}

impl ScrollHost for StaticHost {
    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn content_height(&self) -> f64 {
        self.content_height
    }

    fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    fn set_scroll_top(&mut self, offset: f64) {
        self.scroll_top = offset.clamp(0.0, self.max_scroll());
    }

    fn scene_markers(&self) -> Vec<SceneMarker> {
        self.markers.iter().map(|(m, _)| m.clone()).collect()
    }

    fn marker_offset(&self, marker: &str) -> Option<f64> {
        self.markers
            .iter()
            .find(|(m, _)| m.id == marker)
            .map(|(_, off)| *off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_ids_lay_out_one_viewport_apart() {
        let host = StaticHost::from_scene_ids(800.0, ["cover", "story", "rsvp"]);
        assert_eq!(host.marker_offset("cover"), Some(0.0));
        assert_eq!(host.marker_offset("story"), Some(800.0));
        assert_eq!(host.marker_offset("rsvp"), Some(1600.0));
        assert_eq!(host.marker_offset("missing"), None);
        assert_eq!(host.max_scroll(), 1600.0);
    }

    #[test]
    fn scroll_writes_are_clamped() {
        let mut host = StaticHost::from_scene_ids(800.0, ["a", "b"]);
        host.set_scroll_top(-50.0);
        assert_eq!(host.scroll_top(), 0.0);
        host.set_scroll_top(99_999.0);
        assert_eq!(host.scroll_top(), 800.0);
    }

    #[test]
    fn short_content_has_zero_max_scroll() {
        let host = StaticHost::with_layout(800.0, 400.0, Vec::new());
        assert_eq!(host.max_scroll(), 0.0);
    }
}
