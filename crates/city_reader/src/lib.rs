use anyhow::Context;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info, warn};
use rustc_hash::FxHashMap;
use serde::{de::DeserializeOwned, Deserialize};
use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

/// One line of the city file: `name, x, y`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityRecord {
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl CityRecord {
    pub fn new(name: &str, x: i32, y: i32) -> Self {
        Self {
            name: name.to_string(),
            x,
            y,
        }
    }
}

/// One line of the connection file: `nameA,nameB`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Connection {
    pub from: String,
    pub to: String,
    /// Line in the source file, 0 if the connection was not read from a file
    #[serde(skip)]
    pub line: u64,
}

impl Connection {
    pub fn new(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            line: 0,
        }
    }
}

/// Raw content of a city file and a connection file. Names are not resolved
/// here, a connection may reference a city that does not exist.
#[derive(Debug, Default, Clone)]
pub struct CityMap {
    cities: Vec<CityRecord>,
    connections: Vec<Connection>,
}

impl CityMap {
    pub fn new() -> Self {
        CityMap::default()
    }

    pub fn add_city(&mut self, name: &str, x: i32, y: i32) {
        self.cities.push(CityRecord::new(name, x, y));
    }

    pub fn add_connection(&mut self, from: &str, to: &str) {
        self.connections.push(Connection::new(from, to));
    }

    pub fn get_cities(&self) -> &Vec<CityRecord> {
        &self.cities
    }

    pub fn get_connections(&self) -> &Vec<Connection> {
        &self.connections
    }

    pub fn from_files(cities_path: &Path, connections_path: &Path) -> anyhow::Result<CityMap> {
        let now = std::time::Instant::now();
        info!("BEGIN reading {}", cities_path.display());
        let file = File::open(cities_path)
            .with_context(|| format!("Could not open city file {}", cities_path.display()))?;
        let cities = read_cities(file)
            .with_context(|| format!("Could not parse city file {}", cities_path.display()))?;

        info!("BEGIN reading {}", connections_path.display());
        let file = File::open(connections_path).with_context(|| {
            format!(
                "Could not open connection file {}",
                connections_path.display()
            )
        })?;
        let connections = read_connections(file).with_context(|| {
            format!(
                "Could not parse connection file {}",
                connections_path.display()
            )
        })?;
        info!(
            "FINISHED reading {} cities and {} connections. Took {:?}",
            cities.len(),
            connections.len(),
            now.elapsed()
        );

        Ok(CityMap {
            cities,
            connections,
        })
    }

    pub fn from_readers<C: Read, K: Read>(cities: C, connections: K) -> anyhow::Result<CityMap> {
        Ok(CityMap {
            cities: read_cities(cities)?,
            connections: read_connections(connections)?,
        })
    }

    /// Names that appear more than once (compared case-insensitively), in order
    /// of their first repetition.
    pub fn duplicate_names(&self) -> Vec<String> {
        let mut seen: FxHashMap<String, usize> = FxHashMap::default();
        let mut duplicates = Vec::new();
        for city in &self.cities {
            let count = seen.entry(fold_name(&city.name)).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(city.name.clone());
            }
        }
        duplicates
    }

    /// Writes both files in the same format `from_files` reads.
    pub fn write_files(&self, cities_path: &Path, connections_path: &Path) -> anyhow::Result<()> {
        debug!("BEGIN writing cities");
        let mut wtr = BufWriter::new(File::create(cities_path)?);
        for city in &self.cities {
            writeln!(wtr, "{}, {}, {}", city.name, city.x, city.y)?;
        }
        wtr.flush()?;
        debug!("FINISHED writing cities");

        debug!("BEGIN writing connections");
        let mut wtr = BufWriter::new(File::create(connections_path)?);
        for connection in &self.connections {
            writeln!(wtr, "{},{}", connection.from, connection.to)?;
        }
        wtr.flush()?;
        debug!("FINISHED writing connections");
        Ok(())
    }
}

/// Folds one character for case-insensitive comparison: its single character
/// uppercase mapping, lowercased again. Multi-character uppercase mappings
/// (`ß` -> `SS`) keep the character, `İ` lowercases to a plain `i`.
pub fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    let upper = match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    };
    upper.to_lowercase().next().unwrap_or(upper)
}

/// Key under which two names compare equal iff [`names_match`] holds
pub fn fold_name(name: &str) -> String {
    name.chars().map(fold_char).collect()
}

/// Case-insensitive name comparison, one character at a time
pub fn names_match(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

pub fn read_cities<R: Read>(rdr: R) -> anyhow::Result<Vec<CityRecord>> {
    let cities: Vec<CityRecord> = read_records(rdr)?
        .into_iter()
        .map(|(_, city)| city)
        .collect();

    if cities.is_empty() {
        warn!("City file contains no cities");
    }
    Ok(cities)
}

pub fn read_connections<R: Read>(rdr: R) -> anyhow::Result<Vec<Connection>> {
    Ok(read_records(rdr)?
        .into_iter()
        .map(|(line, mut connection): (u64, Connection)| {
            connection.line = line;
            connection
        })
        .collect())
}

fn read_records<R: Read, T: DeserializeOwned>(rdr: R) -> anyhow::Result<Vec<(u64, T)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .trim(Trim::All)
        .from_reader(rdr);

    let mut records = Vec::new();
    let mut record = StringRecord::new();
    loop {
        let has_record = reader.read_record(&mut record)?;
        if !has_record {
            break;
        }
        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let value: T = record
            .deserialize(None)
            .with_context(|| format!("Malformed line {}: {:?}", line, record))?;
        records.push((line, value));
    }
    Ok(records)
}
