use std::path::PathBuf;

/// One source/target folder mapping, processed as a single unit of work.
#[derive(Debug, Clone)]
pub struct DirectoryPair {
    pub label: String,
    pub source: PathBuf,
    pub target: PathBuf,
}

impl DirectoryPair {
    /// The two fixed pairs this tool exists for: general images and product
    /// images, rooted under the backend static directory and the frontend
    /// public directory.
    #[must_use]
    pub fn default_pairs(backend_static: &str, frontend_public: &str) -> Vec<DirectoryPair> {
        vec![
            DirectoryPair {
                label: "Images".to_string(),
                source: PathBuf::from(backend_static).join("images"),
                target: PathBuf::from(frontend_public).join("images"),
            },
            DirectoryPair {
                label: "Product images".to_string(),
                source: PathBuf::from(backend_static).join("product_img"),
                target: PathBuf::from(frontend_public).join("product_img"),
            },
        ]
    }
}

/// Outcome of one pair's pass. `error` is None when the pass completed,
/// including the zero-file case where the source directory did not exist.
#[derive(Debug)]
pub struct PairReport {
    pub label: String,
    pub files_copied: usize,
    pub bytes_copied: u64,
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pairs_layout() {
        let pairs = DirectoryPair::default_pairs("/srv/backend/static", "/srv/frontend/public");

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].label, "Images");
        assert_eq!(pairs[0].source, PathBuf::from("/srv/backend/static/images"));
        assert_eq!(pairs[0].target, PathBuf::from("/srv/frontend/public/images"));
        assert_eq!(pairs[1].label, "Product images");
        assert_eq!(
            pairs[1].source,
            PathBuf::from("/srv/backend/static/product_img")
        );
        assert_eq!(
            pairs[1].target,
            PathBuf::from("/srv/frontend/public/product_img")
        );
    }
}
