//! RSS feed parsing and HTML stripping.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::NewsError;
use newslens_core::Article;

/// Fields collected for one `<item>` element while walking the feed.
#[derive(Default)]
struct PendingItem {
    title: String,
    link: String,
    description: String,
}

impl PendingItem {
    /// Convert into an [`Article`] if both title and link were present.
    /// The stripped description becomes the article content.
    fn into_article(self) -> Option<Article> {
        if self.title.is_empty() || self.link.is_empty() {
            return None;
        }
        Some(Article::new(self.title, self.description, Some(self.link)))
    }

    fn append_description(&mut self, text: &str) {
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(text);
    }
}

/// Parse an RSS XML feed into [`Article`]s.
///
/// Extracts `<item>` elements, pulling `<title>`, `<link>`, and
/// `<description>` fields. HTML in descriptions (tags or CDATA-wrapped
/// markup) is stripped. Stops after `max_articles` items have been
/// collected.
pub(crate) fn parse_rss_feed(xml: &str, max_articles: usize) -> Result<Vec<Article>, NewsError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut articles = Vec::new();
    let mut pending: Option<PendingItem> = None;
    let mut in_description = false;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                match name.as_str() {
                    "item" => {
                        pending = Some(PendingItem::default());
                        in_description = false;
                    }
                    "description" if pending.is_some() => in_description = true,
                    _ => {}
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"description" => in_description = false,
                b"item" => {
                    if let Some(article) = pending.take().and_then(PendingItem::into_article) {
                        articles.push(article);
                        if articles.len() >= max_articles {
                            break;
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if let Some(item) = pending.as_mut() {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    if in_description {
                        // Text nodes may arrive in pieces around nested tags
                        // like <b>; collect them all.
                        item.append_description(&text);
                    } else {
                        match current_tag.as_str() {
                            "title" => item.title = text,
                            "link" => item.link = text,
                            _ => {}
                        }
                    }
                }
            }
            Ok(Event::CData(e)) => {
                if in_description {
                    if let Some(item) = pending.as_mut() {
                        item.description = strip_html(&String::from_utf8_lossy(e.as_ref()));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(NewsError::Xml(e)),
            _ => {}
        }
    }

    Ok(articles)
}

/// Strip HTML tags from a string and normalize whitespace.
pub(crate) fn strip_html(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"<?xml version="1.0"?>
<rss version="2.0">
  <channel>
    <title>News Search</title>
    <item>
      <title>Acme Reports Strong Earnings</title>
      <link>https://news.example.com/acme-earnings</link>
      <description><![CDATA[Acme <b>exceeded</b> analyst expectations this quarter.]]></description>
    </item>
    <item>
      <title>Acme Faces Lawsuit</title>
      <link>https://news.example.com/acme-lawsuit</link>
      <description>Competitors allege infringement.</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_items_with_title_link_description() {
        let articles = parse_rss_feed(FEED, 10).expect("parse");
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Acme Reports Strong Earnings");
        assert_eq!(
            articles[0].url.as_deref(),
            Some("https://news.example.com/acme-earnings")
        );
        assert_eq!(
            articles[0].content,
            "Acme exceeded analyst expectations this quarter."
        );
        assert_eq!(articles[1].content, "Competitors allege infringement.");
    }

    #[test]
    fn respects_max_articles_cap() {
        let articles = parse_rss_feed(FEED, 1).expect("parse");
        assert_eq!(articles.len(), 1);
    }

    #[test]
    fn skips_items_without_title_or_link() {
        let feed = r"<rss><channel><item><title>Orphan</title></item></channel></rss>";
        let articles = parse_rss_feed(feed, 10).expect("parse");
        assert!(articles.is_empty());
    }

    #[test]
    fn empty_feed_yields_no_articles() {
        let articles = parse_rss_feed("<rss><channel></channel></rss>", 10).expect("parse");
        assert!(articles.is_empty());
    }

    #[test]
    fn channel_title_is_not_mistaken_for_item_title() {
        let articles = parse_rss_feed(FEED, 10).expect("parse");
        assert!(articles.iter().all(|a| a.title != "News Search"));
    }

    #[test]
    fn strip_html_removes_tags_and_collapses_whitespace() {
        assert_eq!(strip_html("<p>hello   <b>world</b></p>"), "hello world");
    }
}
