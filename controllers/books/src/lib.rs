// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod models;

use crate::models::{
    books::{Book, BookSummary},
    ratings::Rating,
    users::User,
};
use anyhow::Error;
use config::DataConfig;
use controller::{error::ErrorKind, Controller};
use serde::de::DeserializeOwned;
use std::{fs::File, io, path::Path};

fn into_error(source: &str, e: csv::Error) -> Error {
    if e.is_io_error() {
        return ErrorKind::FileLoad(source.into(), e.to_string()).into();
    }

    let line = e.position().map(|pos| pos.line()).unwrap_or(0);
    ErrorKind::MalformedRecord(source.into(), line, e.to_string()).into()
}

/// Deserialize every row of a headed csv source, `source` only names it in errors
pub fn load_records<T, R>(rdr: R, delimiter: u8, source: &str) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
    R: io::Read,
{
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .from_reader(rdr);

    let mut records = Vec::new();
    for record in csv.deserialize() {
        let record: T = record.map_err(|e| into_error(source, e))?;
        records.push(record);
    }

    Ok(records)
}

fn load_file<T: DeserializeOwned>(path: &Path, delimiter: u8) -> Result<Vec<T>, Error> {
    let source = path.display().to_string();
    let file = File::open(path).map_err(|e| ErrorKind::FileLoad(source.clone(), e.to_string()))?;

    let records = load_records(io::BufReader::new(file), delimiter, &source)?;
    log::info!("Loaded {} records from {}", records.len(), source);

    Ok(records)
}

pub fn load_books<R: io::Read>(rdr: R, delimiter: u8) -> Result<Vec<Book>, Error> {
    load_records(rdr, delimiter, "books")
}

pub fn load_ratings<R: io::Read>(rdr: R, delimiter: u8) -> Result<Vec<Rating>, Error> {
    load_records(rdr, delimiter, "ratings")
}

pub fn load_users<R: io::Read>(rdr: R, delimiter: u8) -> Result<Vec<User>, Error> {
    load_records(rdr, delimiter, "users")
}

/// The Book-Crossing tables, fully loaded in memory
#[derive(Debug, Clone, Default)]
pub struct BooksController {
    books: Vec<Book>,
    ratings: Vec<Rating>,
    users: Vec<User>,
}

impl BooksController {
    pub fn open(data: &DataConfig) -> Result<Self, Error> {
        let delimiter = data.delimiter_byte()?;

        let books = load_file(&data.books_path(), delimiter)?;
        let ratings = load_file(&data.ratings_path(), delimiter)?;
        let users = load_file(&data.users_path(), delimiter)?;

        Ok(Self::from_records(books, ratings, users))
    }

    pub fn from_records(books: Vec<Book>, ratings: Vec<Rating>, users: Vec<User>) -> Self {
        Self {
            books,
            ratings,
            users,
        }
    }
}

impl Controller for BooksController {
    type User = User;
    type Item = Book;
    type ItemSummary = BookSummary;
    type Rating = Rating;

    fn users(&self) -> Result<Vec<User>, Error> {
        Ok(self.users.clone())
    }

    fn items(&self) -> Result<Vec<Book>, Error> {
        Ok(self.books.clone())
    }

    fn item_summaries(&self) -> Result<Vec<BookSummary>, Error> {
        Ok(self.books.iter().map(Book::summary).collect())
    }

    fn ratings(&self) -> Result<Vec<Rating>, Error> {
        Ok(self.ratings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Error;
    use assert_approx_eq::assert_approx_eq;
    use controller::{Entity, Interaction};
    use std::path::PathBuf;

    fn sample() -> DataConfig {
        DataConfig {
            dir: PathBuf::from("data/sample"),
            ..Default::default()
        }
    }

    #[test]
    fn open_sample_dataset() -> Result<(), Error> {
        let controller = BooksController::open(&sample())?;

        assert_eq!(controller.items()?.len(), 3);
        assert_eq!(controller.ratings()?.len(), 6);
        assert_eq!(controller.users()?.len(), 4);

        Ok(())
    }

    #[test]
    fn ratings_keep_duplicates() -> Result<(), Error> {
        let controller = BooksController::open(&sample())?;
        let ratings = controller.ratings()?;

        let repeated = ratings
            .iter()
            .filter(|r| *r.user_id() == 276729 && r.item_id() == "0521795028")
            .count();

        assert_eq!(repeated, 2);
        assert_approx_eq!(ratings[1].score(), 5.0);

        Ok(())
    }

    #[test]
    fn summaries_drop_publisher_and_images() -> Result<(), Error> {
        let controller = BooksController::open(&sample())?;
        let books = controller.items()?;
        let summaries = controller.item_summaries()?;

        assert_eq!(books.len(), summaries.len());
        for (book, summary) in books.iter().zip(&summaries) {
            assert_eq!(book.isbn, summary.isbn);
            assert_eq!(book.title, summary.title);
            assert_eq!(book.author, summary.author);
            assert_eq!(book.year, summary.year);

            let data = summary.get_data();
            assert!(!data.contains_key("publisher"));
            assert_eq!(data.len(), 3);
        }

        // Quoted commas and non numeric years survive untouched
        assert_eq!(
            summaries[2].title,
            "DK Readers: Creating the X-Men, How It All Began (Level 4: Proficient Readers)"
        );
        assert_eq!(summaries[2].year, "DK Publishing Inc");

        Ok(())
    }

    #[test]
    fn users_with_missing_age() -> Result<(), Error> {
        let controller = BooksController::open(&sample())?;
        let users = controller.users()?;

        assert_eq!(users[0].age, None);
        assert_eq!(users[1].age, Some(18.0));
        assert_eq!(users[2].age, None);
        assert_eq!(users[3].age, None);
        assert_eq!(users[0].location, "nyc, new york, usa");

        Ok(())
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let data = DataConfig {
            dir: PathBuf::from("data/does-not-exist"),
            ..Default::default()
        };

        let err = BooksController::open(&data).unwrap_err();
        match err.downcast_ref::<ErrorKind>() {
            Some(ErrorKind::FileLoad(path, _)) => assert!(path.ends_with("books.csv")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn malformed_rating_names_the_line() {
        let input = "User-ID,ISBN,Book-Rating\n1,0001,5\n2,0002,great\n";
        let err = load_ratings(input.as_bytes(), b',').unwrap_err();

        match err.downcast_ref::<ErrorKind>() {
            Some(ErrorKind::MalformedRecord(source, line, _)) => {
                assert_eq!(source, "ratings");
                assert_eq!(*line, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn semicolon_delimited_ratings() -> Result<(), Error> {
        let input = "User-ID;ISBN;Book-Rating\n7;0001;5\n7;0001;3\n";
        let ratings = load_ratings(input.as_bytes(), b';')?;

        assert_eq!(ratings, vec![Rating::new(7, "0001", 5), Rating::new(7, "0001", 3)]);

        Ok(())
    }
}
