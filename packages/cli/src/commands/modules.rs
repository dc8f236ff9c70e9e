use super::read_page;
use anyhow::Result;
use clap::Args;
use pagecraft_evaluator::collect_module_ids;
use std::collections::BTreeSet;
use std::path::Path;

#[derive(Debug, Args)]
pub struct ModulesArgs {
    /// Page JSON file
    pub page: String,
}

pub fn modules(args: ModulesArgs, cwd: &str) -> Result<()> {
    for module_id in page_module_ids(&Path::new(cwd).join(&args.page))? {
        println!("{module_id}");
    }
    Ok(())
}

fn page_module_ids(path: &Path) -> Result<BTreeSet<String>> {
    let page = read_page(path)?;
    Ok(collect_module_ids(&page.root_component))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_module_ids_are_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("page.json");
        std::fs::write(
            &path,
            r#"{ "rootComponent": {
                "id": "root", "module": "layout.Column", "attributes": {},
                "children": [
                    { "id": "a", "module": "core.Text", "attributes": {} },
                    { "id": "b", "module": "core.Text", "attributes": {} }
                ]
            } }"#,
        )
        .unwrap();

        let ids: Vec<String> = page_module_ids(&path).unwrap().into_iter().collect();
        assert_eq!(ids, vec!["core.Text", "layout.Column"]);
    }

    #[test]
    fn test_missing_page_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = page_module_ids(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.to_string().contains("nope.json"));
    }
}
