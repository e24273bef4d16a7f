use log::debug;
use rand::Rng;
use std::{
    env::temp_dir,
    fs::{create_dir, remove_dir_all, OpenOptions},
    io::{self, Write},
    path::PathBuf,
};
use uuid::Uuid;

/// Set of files with random content in a dedicated temporary folder.
pub struct UseCase {
    pub files: Vec<PathBuf>,
    pub root: PathBuf,
}

impl UseCase {
    /// Creates `count` files of `size` random bytes each.
    pub fn gen(count: usize, size: usize) -> Result<Self, io::Error> {
        let root = temp_dir().join(Uuid::new_v4().to_string());
        if root.exists() {
            remove_dir_all(&root)?;
        }
        create_dir(&root)?;
        let mut files = Vec::new();
        for _ in 0..count {
            let filename = root.join(format!("{}.xml", Uuid::new_v4()));
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&filename)?;
            file.write_all(&random_content(size))?;
            file.flush()?;
            files.push(filename);
        }
        debug!("in \"{}\" created {} files", root.display(), files.len());
        Ok(Self { files, root })
    }

    /// Creates files with exactly the given contents.
    pub fn with_contents(contents: &[&[u8]]) -> Result<Self, io::Error> {
        let usecase = Self::gen(contents.len(), 0)?;
        for (filename, content) in usecase.files.iter().zip(contents.iter()) {
            let mut file = OpenOptions::new().write(true).truncate(true).open(filename)?;
            file.write_all(content)?;
            file.flush()?;
        }
        Ok(usecase)
    }

    pub fn file(&self, index: usize) -> Result<&PathBuf, io::Error> {
        self.files.get(index).ok_or(io::Error::new(
            io::ErrorKind::NotFound,
            "Cannot find a file path by index",
        ))
    }

    /// Appends random bytes to the file with the given index.
    pub fn change(&self, index: usize) -> Result<(), io::Error> {
        let mut file = OpenOptions::new().append(true).open(self.file(index)?)?;
        file.write_all(Uuid::new_v4().as_bytes())?;
        file.flush()?;
        Ok(())
    }

    pub fn clean(&self) -> Result<(), io::Error> {
        if !self.root.exists() {
            return Ok(());
        }
        if !self.root.starts_with(temp_dir()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("root isn't belong to {}", temp_dir().display()),
            ));
        }
        remove_dir_all(&self.root)?;
        debug!("Removed {}", self.root.display());
        Ok(())
    }
}

pub fn random_content(size: usize) -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..size).map(|_| rng.gen::<u8>()).collect()
}
