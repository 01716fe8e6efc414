use crate::core::{Location, LocationSource, Roll};
use crate::utils::error::{LocationError, Result};
use std::io::BufRead;

/// Builds a [`Location`] from message/destination line pairs.
///
/// Line `2i` is a roll's message and line `2i + 1` its destination. An empty
/// input or a trailing message without a destination is rejected as malformed.
pub fn parse_location<I, S>(name: &str, lines: I) -> Result<Location>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    parse_pairs(name, lines.into_iter().map(|line| Ok(line.into())))
}

/// Same as [`parse_location`], pulling lines from a reader.
///
/// `\n` and `\r\n` terminators are stripped; nothing else is trimmed.
pub fn read_location<R: BufRead>(name: &str, reader: R) -> Result<Location> {
    parse_pairs(name, reader.lines().map(|line| line.map_err(LocationError::from)))
}

fn parse_pairs<I>(name: &str, mut cursor: I) -> Result<Location>
where
    I: Iterator<Item = Result<String>>,
{
    let mut rolls = Vec::new();
    let mut line_no = 0;

    while let Some(message) = cursor.next() {
        let message = message?;
        line_no += 1;

        let destination = match cursor.next() {
            Some(destination) => destination?,
            None => {
                return Err(LocationError::Malformed {
                    name: name.to_string(),
                    line: line_no,
                    reason: "message has no destination line".to_string(),
                })
            }
        };
        line_no += 1;

        rolls.push(Roll::new(message, destination));
    }

    if rolls.is_empty() {
        return Err(LocationError::Malformed {
            name: name.to_string(),
            line: 0,
            reason: "source contains no lines".to_string(),
        });
    }

    Ok(Location::new(name, rolls))
}

/// Loads locations through a [`LocationSource`], naming each after its path.
pub struct LocationLoader<S: LocationSource> {
    source: S,
}

impl<S: LocationSource> LocationLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Loads `path`, using its basename as the location name.
    pub fn load(&self, path: &str) -> Result<Location> {
        let name = self.source.name_of(path);
        self.load_named(&name, path)
    }

    pub fn load_named(&self, name: &str, path: &str) -> Result<Location> {
        let reader = self.source.open(path)?;
        let location = read_location(name, reader)?;

        tracing::debug!("Loaded location '{}' with {} rolls", name, location.len());
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_pairs_in_order() {
        let location = parse_location(
            "start",
            ["You see a door", "CASTLE", "You see a cave", "FOREST"],
        )
        .unwrap();

        assert_eq!(location.name(), "start");
        assert_eq!(
            location.rolls(),
            &[
                Roll::new("You see a door", "CASTLE"),
                Roll::new("You see a cave", "FOREST"),
            ]
        );
    }

    #[test]
    fn test_destination_is_uppercased_message_untouched() {
        let location = parse_location("start", ["  A Mixed Case msg  ", "castle gate"]).unwrap();
        let roll = &location.rolls()[0];
        assert_eq!(roll.message(), "  A Mixed Case msg  ");
        assert_eq!(roll.destination(), "CASTLE GATE");
    }

    #[test]
    fn test_odd_line_count_is_rejected() {
        let err = parse_location("start", ["a", "B", "dangling"]).unwrap_err();
        match err {
            LocationError::Malformed { name, line, .. } => {
                assert_eq!(name, "start");
                assert_eq!(line, 3);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let err = parse_location::<_, String>("start", Vec::new()).unwrap_err();
        assert!(matches!(err, LocationError::Malformed { line: 0, .. }));
    }

    #[test]
    fn test_blank_lines_are_still_lines() {
        let location = parse_location("start", ["", "void"]).unwrap();
        assert_eq!(location.rolls()[0].message(), "");
        assert_eq!(location.rolls()[0].destination(), "VOID");
    }

    #[test]
    fn test_read_location_strips_terminators() {
        let text = "You see a door\r\ncastle\nYou see a cave\nforest\n";
        let location = read_location("start", Cursor::new(text)).unwrap();

        assert_eq!(location.len(), 2);
        assert_eq!(location.rolls()[0].message(), "You see a door");
        assert_eq!(location.rolls()[0].destination(), "CASTLE");
        assert_eq!(location.rolls()[1].destination(), "FOREST");
    }

    #[test]
    fn test_read_location_without_final_newline() {
        let location = read_location("start", Cursor::new("msg\ndest")).unwrap();
        assert_eq!(location.rolls(), &[Roll::new("msg", "DEST")]);
    }

    #[test]
    fn test_read_location_surfaces_invalid_utf8() {
        let bytes: &[u8] = b"ok\n\xff\xfe\n";
        let err = read_location("start", Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, LocationError::IoError(_)));
    }

    struct InMemory(&'static str);

    impl LocationSource for InMemory {
        fn open(&self, path: &str) -> Result<Box<dyn BufRead>> {
            if path.ends_with("missing.txt") {
                return Err(LocationError::NotFound {
                    path: path.to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
            Ok(Box::new(Cursor::new(self.0)))
        }
    }

    #[test]
    fn test_loader_names_location_after_basename() {
        let loader = LocationLoader::new(InMemory("a\nb\n"));
        let location = loader.load("maps/forest.txt").unwrap();
        assert_eq!(location.name(), "forest.txt");
    }

    #[test]
    fn test_loader_propagates_not_found() {
        let loader = LocationLoader::new(InMemory("a\nb\n"));
        let err = loader.load("maps/missing.txt").unwrap_err();
        assert!(matches!(err, LocationError::NotFound { .. }));
    }
}
