use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::ConfigError;

/// Fixed, ordered set of image filenames used for rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePool {
    dir: String,
    files: Vec<String>,
}

impl ImagePool {
    pub fn new(dir: impl Into<String>, files: Vec<String>) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Err(ConfigError::EmptyImagePool);
        }
        Ok(Self {
            dir: dir.into(),
            files,
        })
    }

    /// Uniform pick with replacement, as a page-relative image path.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let file = self.files.choose(rng).map_or("", String::as_str);
        self.path_for(file)
    }

    pub fn path_for(&self, file: &str) -> String {
        if self.dir.is_empty() {
            file.to_string()
        } else {
            format!("{}/{}", self.dir.trim_end_matches('/'), file)
        }
    }

    /// Whether `src` is one of the pool's paths.
    pub fn contains_path(&self, src: &str) -> bool {
        self.files.iter().any(|f| self.path_for(f) == src)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn pool() -> ImagePool {
        ImagePool::new(
            "images",
            vec!["a.jpg".to_string(), "b.jpg".to_string(), "c.jpg".to_string()],
        )
        .unwrap_or_else(|_| panic!("non-empty pool"))
    }

    #[test]
    fn picks_stay_in_pool() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let src = pool.pick(&mut rng);
            assert!(pool.contains_path(&src), "{src} not in pool");
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        let pool = pool();
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(pool.pick(&mut rng));
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_pool_is_an_error() {
        assert!(ImagePool::new("images", Vec::new()).is_err());
    }

    #[test]
    fn path_joins_directory() {
        let pool = pool();
        assert_eq!(pool.path_for("my photo.jpg"), "images/my photo.jpg");
        let bare = ImagePool::new("", vec!["x.jpg".to_string()])
            .unwrap_or_else(|_| panic!("non-empty pool"));
        assert_eq!(bare.path_for("x.jpg"), "x.jpg");
    }
}
