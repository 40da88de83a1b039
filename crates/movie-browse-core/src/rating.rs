/// Star-rating input state. The hover preview is transient; only
/// [`StarRating::select`] moves the committed value.
#[derive(Debug, Clone)]
pub struct StarRating {
    max: u8,
    committed: Option<u8>,
    preview: Option<u8>,
    revisions: u32,
    labels: Vec<String>,
}

impl StarRating {
    pub fn new(max: u8) -> Self {
        Self {
            max,
            committed: None,
            preview: None,
            revisions: 0,
            labels: Vec::new(),
        }
    }

    /// Labels are only used when there is exactly one per rating level.
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    /// The committed rating, if any.
    pub fn value(&self) -> Option<u8> {
        self.committed
    }

    pub fn revisions(&self) -> u32 {
        self.revisions
    }

    /// What the widget shows: the preview wins over the committed value.
    pub fn display_value(&self) -> u8 {
        self.preview.or(self.committed).unwrap_or(0)
    }

    pub fn label(&self) -> Option<&str> {
        if self.labels.len() != self.max as usize {
            return None;
        }
        let shown = self.display_value();
        if shown == 0 {
            return None;
        }
        self.labels.get(shown as usize - 1).map(String::as_str)
    }

    pub fn hover(&mut self, rating: u8) {
        if rating >= 1 && rating <= self.max {
            self.preview = Some(rating);
        }
    }

    pub fn clear_hover(&mut self) {
        self.preview = None;
    }

    /// Commit a rating. Re-selecting the current value changes nothing and
    /// does not count as a revision.
    pub fn select(&mut self, rating: u8) {
        if rating < 1 || rating > self.max {
            return;
        }
        self.preview = None;
        if self.committed == Some(rating) {
            return;
        }
        self.committed = Some(rating);
        self.revisions += 1;
    }

    /// Commit whatever is currently previewed.
    pub fn select_preview(&mut self) {
        if let Some(rating) = self.preview {
            self.select(rating);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_never_commits() {
        let mut rating = StarRating::new(10);

        rating.hover(7);
        assert_eq!(rating.value(), None);
        assert_eq!(rating.display_value(), 7);

        rating.clear_hover();
        assert_eq!(rating.display_value(), 0);
        assert_eq!(rating.revisions(), 0);
    }

    #[test]
    fn test_select_commits_and_counts_revisions() {
        let mut rating = StarRating::new(10);

        rating.select(6);
        assert_eq!(rating.value(), Some(6));
        assert_eq!(rating.revisions(), 1);

        rating.select(8);
        assert_eq!(rating.value(), Some(8));
        assert_eq!(rating.revisions(), 2);

        // Re-selecting the same value is not a revision.
        rating.select(8);
        assert_eq!(rating.revisions(), 2);
    }

    #[test]
    fn test_preview_falls_back_to_committed() {
        let mut rating = StarRating::new(10);

        rating.select(5);
        rating.hover(9);
        assert_eq!(rating.display_value(), 9);
        assert_eq!(rating.value(), Some(5));

        rating.clear_hover();
        assert_eq!(rating.display_value(), 5);
    }

    #[test]
    fn test_select_preview() {
        let mut rating = StarRating::new(10);

        rating.select_preview();
        assert_eq!(rating.value(), None);

        rating.hover(4);
        rating.select_preview();
        assert_eq!(rating.value(), Some(4));
        assert_eq!(rating.display_value(), 4);
    }

    #[test]
    fn test_out_of_range_is_ignored() {
        let mut rating = StarRating::new(5);

        rating.hover(0);
        rating.hover(6);
        assert_eq!(rating.display_value(), 0);

        rating.select(6);
        assert_eq!(rating.value(), None);
    }

    #[test]
    fn test_labels_only_match_exact_count() {
        let labels = vec!["Bad".to_string(), "Fine".to_string(), "Great".to_string()];
        let mut rating = StarRating::new(3).with_labels(labels.clone());

        assert_eq!(rating.label(), None);
        rating.hover(2);
        assert_eq!(rating.label(), Some("Fine"));

        let mut mismatched = StarRating::new(5).with_labels(labels);
        mismatched.hover(2);
        assert_eq!(mismatched.label(), None);
    }
}
