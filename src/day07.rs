// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::collections::HashMap;


const SMALL_DIR_MAX_SIZE: usize = 100_000;
const DISK_SIZE: usize = 70_000_000;
const FREE_SPACE_NEEDED: usize = 30_000_000;


#[derive(Default)]
#[cfg_attr(test, derive(Debug))]
struct Dir<'s> {
	parent: Option<usize>,
	/// Name as key, index into `FileSystem::0` as value.
	subdirs: HashMap<&'s str, usize>,
	/// Name as key, size as value.
	files: HashMap<&'s str, usize>,
}

/// Subdirectories always come after their parent.
#[cfg_attr(test, derive(Debug))]
struct FileSystem<'s>(Vec<Dir<'s>>);

impl Default for FileSystem<'_> {
	fn default() -> Self {
		FileSystem(vec![Dir::default()])
	}
}

impl<'s> FileSystem<'s> {
	const ROOT: usize = 0;

	fn subdir(&mut self, idx: usize, name: &'s str) -> usize {
		if let Some(&sub_idx) = self.0[idx].subdirs.get(name) { return sub_idx }
		let sub_idx = self.0.len();
		self.0.push(Dir { parent: Some(idx), ..Dir::default() });
		self.0[idx].subdirs.insert(name, sub_idx);
		sub_idx
	}

	/// Indexed like `self.0`.
	fn total_sizes(&self) -> Vec<usize> {
		let mut sizes = vec![0; self.0.len()];
		for (idx, dir) in self.0.iter().enumerate().rev() {
			sizes[idx] += dir.files.values().sum::<usize>();
			if let Some(parent) = dir.parent { sizes[parent] += sizes[idx] }
		}
		sizes
	}
}

#[cfg(any(test, LOGGING))]
impl std::fmt::Display for FileSystem<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use itertools::{Either, Itertools as _};

		fn fmt_dir(fs: &FileSystem<'_>, f: &mut std::fmt::Formatter<'_>, idx: usize, depth: usize)
		-> std::fmt::Result {
			let dir = &fs.0[idx];
			let entries = dir.subdirs.iter().map(|(&name, &idx)| (name, Either::Left(idx)))
				.chain(dir.files.iter().map(|(&name, &size)| (name, Either::Right(size))))
				.sorted_by_key(|&(name, _)| name);
			for (name, entry) in entries {
				write!(f, "\n{:indent$}- {name} ", "", indent = depth * 2)?;
				match entry {
					Either::Left(idx) => {
						f.write_str("(dir)")?;
						fmt_dir(fs, f, idx, depth + 1)?
					}
					Either::Right(size) => write!(f, "(file, size={size})")?,
				}
			}
			Ok(())
		}

		f.write_str("- / (dir)")?;
		fmt_dir(self, f, Self::ROOT, 1)
	}
}


fn input_file_system_from_str(s: &str) -> Result<FileSystem<'_>, parsing::LineError> {
	parsing::try_file_system_from_str(s)
}


fn part1_impl(input_file_system: FileSystem<'_>) -> usize {
	#[cfg(LOGGING)]
	println!("{input_file_system}\n");
	input_file_system.total_sizes().into_iter()
		.filter(|&size| size <= SMALL_DIR_MAX_SIZE)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, parsing::LineError> {
	Ok(part1_impl(input_file_system_from_str(input)?))
}


fn part2_impl(input_file_system: FileSystem<'_>) -> usize {
	let sizes = input_file_system.total_sizes();
	let used = sizes[FileSystem::ROOT];
	let needed = used.saturating_sub(DISK_SIZE - FREE_SPACE_NEEDED);
	sizes.into_iter()
		.filter(|&size| size >= needed)
		.min()
		.unwrap_or(used)
}

pub(crate) fn part2(input: &str) -> Result<usize, parsing::LineError> {
	Ok(part2_impl(input_file_system_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::FileSystem;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum LineErrorKind {
		InvalidCommand,
		InvalidName,
		CannotChangeOutOfRootDir,
		UnexpectedOutput,
		Output,
		Size(ParseIntError),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) struct LineError {
		line: usize,
		kind: LineErrorKind,
	}

	fn is_valid_name(name: &str) -> bool {
		!name.is_empty() && !name.contains(|c: char| c == '/' || c == ' ')
	}

	pub(super) fn try_file_system_from_str(s: &str) -> Result<FileSystem<'_>, LineError> {
		use LineErrorKind::*;

		let mut fs = FileSystem::default();
		let mut cwd = FileSystem::ROOT;
		let mut listing = false;

		for (l, line) in s.lines().take_while(|line| !line.is_empty()).enumerate() {
			let err = |kind| LineError { line: l + 1, kind };

			if let Some(command) = line.strip_prefix("$ ") {
				listing = false;
				match command.strip_prefix("cd ") {
					Some("/") => cwd = FileSystem::ROOT,
					Some("..") => cwd = fs.0[cwd].parent.ok_or(err(CannotChangeOutOfRootDir))?,
					Some(name) if is_valid_name(name) => cwd = fs.subdir(cwd, name),
					Some(_) => return Err(err(InvalidName)),
					None if command == "ls" => listing = true,
					None => return Err(err(InvalidCommand)),
				}
				continue
			}

			if !listing { return Err(err(UnexpectedOutput)) }
			let (prefix, name) = line.split_once(' ').ok_or(err(Output))?;
			if !is_valid_name(name) { return Err(err(InvalidName)) }
			if prefix == "dir" {
				_ = fs.subdir(cwd, name)
			} else {
				let size = prefix.parse().map_err(|e| err(Size(e)))?;
				_ = fs.0[cwd].files.insert(name, size)
			}
		}

		Ok(fs)
	}

	#[test]
	fn tests() {
		use LineErrorKind::*;
		let fs = try_file_system_from_str(super::tests::INPUT).unwrap();
		assert_eq!(fs.0.len(), 4);
		assert_eq!(fs.0[FileSystem::ROOT].files.len(), 2);

		assert!(matches!(try_file_system_from_str("$ cd /\n$ cd .."),
			Err(LineError { line: 2, kind: CannotChangeOutOfRootDir })));
		assert!(matches!(try_file_system_from_str("$ cd /\n123 a"),
			Err(LineError { line: 2, kind: UnexpectedOutput })));
		assert!(matches!(try_file_system_from_str("$ ls\n123 a\n$ rm a"),
			Err(LineError { line: 3, kind: InvalidCommand })));
		assert!(matches!(try_file_system_from_str("$ ls\n12x a"),
			Err(LineError { line: 2, kind: Size(_) })));
		assert!(matches!(try_file_system_from_str("$ ls\n123"),
			Err(LineError { line: 2, kind: Output })));
		assert!(matches!(try_file_system_from_str("$ cd a/b"),
			Err(LineError { line: 1, kind: InvalidName })));
	}
}
