//! Descriptor parser: recovers the coordinate triple from a directory's POM.
//!
//! Each of `groupId`/`artifactId`/`version` is looked up as a direct child
//! of the project root first, then under a `<parent>` element anywhere in
//! the document. In both tiers the last matching element wins, mirroring
//! the inherited-then-overridden ordering POM files use. A coordinate is
//! only ever returned fully populated.

use crate::error::DescriptorError;
use crate::model::Coordinate;
use roxmltree::{Document, Node};
use std::fs;
use std::path::{Path, PathBuf};

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";

/// Element-lookup convention for one document, chosen once from the root
/// element's default namespace and applied to every subsequent query.
#[derive(Clone, Copy)]
struct TagMatch {
    namespace: Option<&'static str>,
}

impl TagMatch {
    fn for_document(doc: &Document) -> Self {
        let namespace = match doc.root_element().tag_name().namespace() {
            Some(POM_NAMESPACE) => Some(POM_NAMESPACE),
            _ => None,
        };
        Self { namespace }
    }

    fn matches(&self, node: Node, name: &str) -> bool {
        node.is_element()
            && node.tag_name().name() == name
            && node.tag_name().namespace() == self.namespace
    }
}

fn locate_pom(dir: &Path) -> Result<PathBuf, DescriptorError> {
    let entries = fs::read_dir(dir).map_err(|source| DescriptorError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| DescriptorError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("pom") {
            return Ok(path);
        }
    }
    Err(DescriptorError::NotFound(dir.to_path_buf()))
}

fn field(doc: &Document, tag: TagMatch, name: &str) -> Option<String> {
    let root = doc.root_element();
    let direct = root.children().filter(|n| tag.matches(*n, name)).last();
    let found = direct.or_else(|| {
        root.descendants()
            .filter(|n| tag.matches(*n, name))
            .filter(|n| n.parent().is_some_and(|p| tag.matches(p, "parent")))
            .last()
    });
    found
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Extracts the coordinate triple from the `.pom` file in `dir`.
pub fn parse_descriptor(dir: &Path) -> Result<Coordinate, DescriptorError> {
    let pom = locate_pom(dir)?;
    let text = fs::read_to_string(&pom).map_err(|source| DescriptorError::Io {
        path: pom.clone(),
        source,
    })?;
    let doc = Document::parse(&text).map_err(|source| DescriptorError::Malformed {
        path: pom.clone(),
        source,
    })?;
    let tag = TagMatch::for_document(&doc);

    let group = field(&doc, tag, "groupId");
    let artifact = field(&doc, tag, "artifactId");
    let version = field(&doc, tag, "version");

    match (group, artifact, version) {
        (Some(group), Some(artifact), Some(version)) => Ok(Coordinate {
            group,
            artifact,
            version,
        }),
        (group, artifact, version) => {
            let missing = [
                (group.is_none(), "groupId"),
                (artifact.is_none(), "artifactId"),
                (version.is_none(), "version"),
            ]
            .iter()
            .filter(|(absent, _)| *absent)
            .map(|(_, name)| *name)
            .collect::<Vec<_>>()
            .join(", ");
            Err(DescriptorError::IncompleteFields { path: pom, missing })
        }
    }
}
