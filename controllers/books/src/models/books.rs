// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use common_macros::hash_map;
use controller::Entity;
use serde::Deserialize;
use std::collections::HashMap;

// As found in the books file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Book {
    #[serde(rename = "ISBN")]
    pub isbn: String,
    #[serde(rename = "Book-Title")]
    pub title: String,
    #[serde(rename = "Book-Author")]
    pub author: String,
    // Kept verbatim, the dataset has non numeric years
    #[serde(rename = "Year-Of-Publication")]
    pub year: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "Image-URL-S")]
    pub image_url_s: String,
    #[serde(rename = "Image-URL-M")]
    pub image_url_m: String,
    #[serde(rename = "Image-URL-L")]
    pub image_url_l: String,
}

impl Book {
    /// Drop the publisher and image urls, everything else is kept as is
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            isbn: self.isbn.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
            year: self.year.clone(),
        }
    }
}

impl Entity for Book {
    type Id = String;

    fn get_id(&self) -> Self::Id {
        self.isbn.clone()
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "title".into() => self.title.clone(),
            "author".into() => self.author.clone(),
            "year".into() => self.year.clone(),
            "publisher".into() => self.publisher.clone(),
        }
    }
}

// Presentation view of a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSummary {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub year: String,
}

impl Entity for BookSummary {
    type Id = String;

    fn get_id(&self) -> Self::Id {
        self.isbn.clone()
    }

    fn get_data(&self) -> HashMap<String, String> {
        hash_map! {
            "title".into() => self.title.clone(),
            "author".into() => self.author.clone(),
            "year".into() => self.year.clone(),
        }
    }
}
