// GNU Affero General Public License v3.0 or later (see LICENSE or https://www.gnu.org/licenses/agpl.txt)
//! Document tree traversal
//!
//! A single pre-order walk drives the three searches made while scraping:
//! version history tables on the index page, detail links inside those
//! tables, and version tokens on each detail page.

use std::collections::HashSet;

use ego_tree::NodeRef;
use scraper::{Html, Node};

use crate::config::ScrapeConfig;

/// Whether the walk descends below the node just visited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    Continue,
    SkipChildren,
}

/// Visit `node` and then its descendants in document order
///
/// Children of a node are skipped when `visit` returns [`Walk::SkipChildren`];
/// the rest of the tree is still visited.
pub fn walk<'a, F>(node: NodeRef<'a, Node>, visit: &mut F)
where
    F: FnMut(NodeRef<'a, Node>) -> Walk,
{
    if visit(node) == Walk::SkipChildren {
        return;
    }

    for child in node.children() {
        walk(child, visit);
    }
}

/// Find `<table>` elements whose `data-description` contains `marker`
#[must_use]
pub fn find_version_tables<'a>(document: &'a Html, marker: &str) -> Vec<NodeRef<'a, Node>> {
    let mut tables = Vec::new();
    walk(document.tree.root(), &mut |node| {
        if let Some(element) = node.value().as_element()
            && element.name() == "table"
            && element
                .attr("data-description")
                .is_some_and(|description| description.contains(marker))
        {
            tables.push(node);
        }
        Walk::Continue
    });
    tables
}

/// Collect the detail URL of every `<a>` below `root` whose href matches the link pattern
#[must_use]
pub fn find_version_links(root: NodeRef<'_, Node>, config: &ScrapeConfig) -> Vec<String> {
    let mut links = Vec::new();
    walk(root, &mut |node| {
        if let Some(element) = node.value().as_element()
            && element.name() == "a"
            && let Some(href) = element.attr("href")
            && config.link_pattern.is_match(href)
        {
            links.push(config.detail_url(href));
        }
        Walk::Continue
    });
    links
}

/// Insert every trimmed text node that is a build token into `found`
///
/// Returns the number of matching text nodes, including ones already present
/// in `found`.
pub fn find_version_tokens(
    document: &Html,
    config: &ScrapeConfig,
    found: &mut HashSet<String>,
) -> usize {
    let mut matches = 0;
    walk(document.tree.root(), &mut |node| {
        if let Some(text) = node.value().as_text() {
            let token = text.trim();
            if config.is_version_token(token) {
                found.insert(token.to_string());
                matches += 1;
                return Walk::SkipChildren;
            }
        }
        Walk::Continue
    });
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    #[test]
    fn walk_visits_in_pre_order() {
        let doc = page("<div><p>a</p><p>b</p></div><span>c</span>");
        let mut names = Vec::new();
        walk(doc.tree.root(), &mut |node| {
            if let Some(element) = node.value().as_element() {
                names.push(element.name().to_string());
            }
            Walk::Continue
        });
        assert_eq!(names, ["html", "head", "body", "div", "p", "p", "span"]);
    }

    #[test]
    fn skip_children_prunes_only_that_subtree() {
        let doc = page("<div id=\"skip\"><p>hidden</p></div><p>shown</p>");
        let mut texts = Vec::new();
        walk(doc.tree.root(), &mut |node| match node.value() {
            Node::Element(element) if element.attr("id") == Some("skip") => Walk::SkipChildren,
            Node::Text(text) => {
                texts.push(text.trim().to_string());
                Walk::Continue
            }
            _ => Walk::Continue,
        });
        assert_eq!(texts, ["shown"]);
    }

    #[test]
    fn tables_require_marker_in_description() {
        let doc = page(concat!(
            "<table data-description=\"Bedrock version history\"></table>",
            "<table data-description=\"Java release list\"></table>",
            "<table></table>",
            "<div data-description=\"version history\"></div>",
        ));
        let tables = find_version_tables(&doc, "version history");
        assert_eq!(tables.len(), 1);
    }

    #[test]
    fn links_are_prefixed_with_origin() {
        let config = ScrapeConfig::default();
        let doc = page(concat!(
            "<table data-description=\"version history\"><tr><td>",
            "<a href=\"/Bedrock_Edition_1.16.210\">1.16.210</a>",
            "<a href=\"/Bedrock_Edition_beta_1.16.220.50\">beta</a>",
            "</td></tr></table>",
        ));
        let tables = find_version_tables(&doc, &config.table_marker);
        let links = find_version_links(tables[0], &config);
        assert_eq!(
            links,
            ["https://minecraft.gamepedia.com/Bedrock_Edition_1.16.210"]
        );
    }

    #[test]
    fn tokens_are_trimmed_before_matching() {
        let config = ScrapeConfig::default();
        let doc = page("<p>\n  1.16.210.51 \n</p><p>1.16.210</p><p>v1.2.3.4</p>");
        let mut found = HashSet::new();
        let matches = find_version_tokens(&doc, &config, &mut found);
        assert_eq!(matches, 1);
        assert!(found.contains("1.16.210.51"));
    }

    #[test]
    fn tokens_in_other_digit_scripts_are_ignored() {
        let config = ScrapeConfig::default();
        let doc = page(concat!(
            "<p>\u{661}.\u{662}.\u{663}.\u{664}</p>",
            "<p>\u{ff11}.\u{ff12}.\u{ff13}.\u{ff14}</p>",
        ));
        let mut found = HashSet::new();
        assert_eq!(find_version_tokens(&doc, &config, &mut found), 0);
        assert!(found.is_empty());
    }
}
