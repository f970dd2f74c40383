// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use anyhow::{bail, Error};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub dir: PathBuf,
    pub books: String,
    pub ratings: String,
    pub users: String,
    pub delimiter: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
            books: "books.csv".into(),
            ratings: "ratings.csv".into(),
            users: "users.csv".into(),
            delimiter: ',',
        }
    }
}

impl DataConfig {
    pub fn books_path(&self) -> PathBuf {
        self.dir.join(&self.books)
    }

    pub fn ratings_path(&self) -> PathBuf {
        self.dir.join(&self.ratings)
    }

    pub fn users_path(&self) -> PathBuf {
        self.dir.join(&self.users)
    }

    /// The delimiter as the single byte the csv reader expects
    pub fn delimiter_byte(&self) -> Result<u8, Error> {
        if !self.delimiter.is_ascii() {
            bail!("Delimiter must be a single ascii character, got {:?}", self.delimiter);
        }

        Ok(self.delimiter as u8)
    }
}

/// Minimum activity a user or a book needs to survive the filter
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    pub min_user_ratings: usize,
    pub min_book_ratings: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_user_ratings: 100,
            min_book_ratings: 20,
        }
    }
}

/// How repeated (user, item) ratings collapse into a single cell
#[derive(Debug, Copy, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Mean,
    First,
    Last,
    Min,
    Max,
}

impl Default for Aggregation {
    fn default() -> Self {
        Aggregation::Mean
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    pub aggregation: Aggregation,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct FeaturesConfig {
    pub dimension: Option<usize>,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub data: DataConfig,
    pub filter: FilterConfig,
    pub matrix: MatrixConfig,
    pub features: FeaturesConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        let parsed: Self = toml::from_str(contents)?;
        parsed.data.delimiter_byte()?;

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;

    #[test]
    fn load_example_config() -> Result<(), Error> {
        let expected = Config {
            data: DataConfig::default(),
            filter: FilterConfig {
                min_user_ratings: 100,
                min_book_ratings: 20,
            },
            matrix: MatrixConfig {
                aggregation: Aggregation::Mean,
            },
            features: FeaturesConfig {
                dimension: Some(10),
                seed: Some(42),
            },
        };

        let loaded = Config::load("example.toml")?;
        assert_eq!(expected, loaded);

        Ok(())
    }

    #[test]
    fn partial_config_falls_back_to_defaults() -> Result<(), Error> {
        let loaded = Config::from_toml(
            r#"
            [filter]
            min_book_ratings = 5

            [matrix]
            aggregation = "max"
            "#,
        )?;

        assert_eq!(loaded.filter.min_user_ratings, 100);
        assert_eq!(loaded.filter.min_book_ratings, 5);
        assert_eq!(loaded.matrix.aggregation, Aggregation::Max);
        assert_eq!(loaded.data, DataConfig::default());
        assert_eq!(loaded.features.dimension, None);

        Ok(())
    }

    #[test]
    fn data_paths() -> Result<(), Error> {
        let data = DataConfig {
            dir: PathBuf::from("bx"),
            delimiter: ';',
            ..Default::default()
        };

        assert_eq!(data.ratings_path(), PathBuf::from("bx").join("ratings.csv"));
        assert_eq!(data.delimiter_byte()?, b';');

        Ok(())
    }

    #[test]
    fn non_ascii_delimiter_built_in_code() {
        let data = DataConfig {
            delimiter: 'é',
            ..Default::default()
        };

        assert!(data.delimiter_byte().is_err());
    }

    #[test]
    fn reject_non_ascii_delimiter() {
        let loaded = Config::from_toml("[data]\ndelimiter = \"§\"\n");
        assert!(loaded.is_err());
    }

    #[test]
    fn reject_unknown_aggregation() {
        let loaded = Config::from_toml("[matrix]\naggregation = \"median\"\n");
        assert!(loaded.is_err());
    }
}
