pub const fn default_false() -> bool { false }

pub fn default_input_path() -> String { "My Clippings.txt".to_string() }

pub fn default_output_dir() -> String { "clippings".to_string() }

pub fn default_extension() -> String { "md".to_string() }
