use std::env;
use std::fs;
use std::path::Path;

fn main() {
    embed_levels();
}

fn collect_levels(dir: &Path, prefix: &str, levels: &mut Vec<String>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            let subdir_name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
            let new_prefix = if prefix.is_empty() {
                subdir_name.to_string()
            } else {
                format!("{}/{}", prefix, subdir_name)
            };
            println!("cargo:rerun-if-changed={}", path.display());
            collect_levels(&path, &new_prefix, levels);
        } else if path.extension().is_some_and(|e| e == "txt")
            && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
        {
            let level_name = if prefix.is_empty() {
                stem.to_string()
            } else {
                format!("{}/{}", prefix, stem)
            };
            levels.push(level_name);
            println!("cargo:rerun-if-changed={}", path.display());
        }
    }
}

fn embed_levels() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("levels.rs");

    let levels_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../levels");

    println!("cargo:rerun-if-changed={}", levels_dir.display());

    let mut levels: Vec<String> = Vec::new();
    collect_levels(&levels_dir, "", &mut levels);

    levels.sort();

    let mut code = String::new();
    code.push_str("pub(crate) static LEVEL_DATA: &[(&str, &str)] = &[\n");

    for name in &levels {
        let rel_txt = format!("../levels/{}.txt", name);

        code.push_str(&format!(
            "    ({:?}, include_str!(concat!(env!(\"CARGO_MANIFEST_DIR\"), \"/{rel_txt}\"))),\n",
            name
        ));
    }

    code.push_str("];\n");

    // Only write if content changed to avoid unnecessary recompilation
    let should_write = match fs::read_to_string(&dest_path) {
        Ok(existing) => existing != code,
        Err(_) => true,
    };
    if should_write {
        fs::write(&dest_path, code).unwrap();
    }
}
