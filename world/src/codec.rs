//! Plain text pattern files.
//!
//! ```text
//! 4 3
//! *O**
//! **O*
//! OOO*
//! ```
//!
//! The header holds the width then the height. Each following line is one row
//! (`y` from the top); `'O'` is alive and anything else is dead.

use std::{
    fmt::{self, Display, Write},
    fs,
    path::Path,
    str::FromStr,
};

use crate::{
    World,
    error::{ParseError, WorldError},
};

const ALIVE: char = 'O';
const DEAD: char = '*';

impl World {
    pub fn from_text(s: &str) -> Result<Self, WorldError> {
        let mut lines = s.lines();
        let (width, height) = parse_header(lines.next())?;
        let mut world = World::new(width, height)?;
        let mut rows = 0;
        for (y, line) in lines.enumerate() {
            let line_number = y + 2;
            if y >= height {
                if line.contains(ALIVE) {
                    let e = ParseError::RowOutOfRange {
                        line: line_number,
                        height,
                    };
                    return Err(e.into());
                }
                continue;
            }
            rows += 1;
            for (x, c) in line.chars().enumerate() {
                match (c, x < width) {
                    (ALIVE, true) => world.set_alive(x, y, true),
                    (ALIVE, false) => {
                        let e = ParseError::ColumnOutOfRange {
                            line: line_number,
                            column: x,
                            width,
                        };
                        return Err(e.into());
                    }
                    _ => (),
                }
            }
        }
        if rows < height {
            let e = ParseError::MissingRows {
                expected: height,
                found: rows,
            };
            return Err(e.into());
        }
        Ok(world)
    }

    pub fn save_to_text(&self) -> String {
        self.to_string()
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WorldError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| WorldError::Io {
            path: path.to_owned(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), WorldError> {
        let path = path.as_ref();
        fs::write(path, self.save_to_text()).map_err(|source| WorldError::Io {
            path: path.to_owned(),
            source,
        })
    }
}

fn parse_header(line: Option<&str>) -> Result<(usize, usize), ParseError> {
    let line = line
        .filter(|l| !l.trim().is_empty())
        .ok_or(ParseError::MissingHeader)?;
    let mut tokens = line.split_whitespace();
    let mut dimension = |name: &'static str| -> Result<usize, ParseError> {
        let token = tokens.next().ok_or(ParseError::MissingDimension(name))?;
        token.parse().map_err(|_| ParseError::InvalidNumber {
            name,
            token: token.to_owned(),
        })
    };
    let width = dimension("width")?;
    let height = dimension("height")?;
    if let Some(token) = tokens.next() {
        return Err(ParseError::TrailingHeaderToken(token.to_owned()));
    }
    Ok((width, height))
}

impl Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.width(), self.height())?;
        for y in 0..self.height() {
            for x in 0..self.width() {
                f.write_char(if self.alive(x, y) { ALIVE } else { DEAD })?;
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

impl FromStr for World {
    type Err = WorldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        World::from_text(s)
    }
}
