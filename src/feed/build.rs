// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rss::extension::itunes::{ITunesChannelExtensionBuilder, ITunesItemExtensionBuilder};
use rss::{Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, Item, ItemBuilder};

use crate::descriptor::ShowDescriptor;
use crate::episode::EpisodeRecord;

/// Value of the channel's `<generator>` element
pub const GENERATOR: &str = concat!("castdown ", env!("CARGO_PKG_VERSION"));

/// Assemble the RSS channel for a show and its episodes
///
/// Items keep the order of `episodes`.
pub fn build_channel(show: &ShowDescriptor, episodes: &[EpisodeRecord]) -> Channel {
    let record = &show.record;

    let itunes = ITunesChannelExtensionBuilder::default()
        .author(non_empty(&record.author))
        .summary(non_empty(&show.description_html))
        .image(record.image.clone())
        .build();

    let items: Vec<Item> = episodes.iter().map(build_item).collect();

    ChannelBuilder::default()
        .title(record.title.clone())
        .link(record.base_url.clone())
        .description(show.description_html.clone())
        .language(record.language.clone())
        .generator(Some(GENERATOR.to_string()))
        .itunes_ext(Some(itunes))
        .items(items)
        .build()
}

fn build_item(episode: &EpisodeRecord) -> Item {
    let guid = GuidBuilder::default()
        .value(episode.content_id.clone())
        .permalink(false)
        .build();

    let enclosure = EnclosureBuilder::default()
        .url(episode.media_url.clone())
        .length(episode.media_length.to_string())
        .mime_type(episode.media_type.to_string())
        .build();

    let itunes = ITunesItemExtensionBuilder::default()
        .author(non_empty(&episode.author))
        .summary(Some(episode.description_html.clone()))
        .build();

    ItemBuilder::default()
        .title(Some(episode.title.clone()))
        .pub_date(Some(episode.pub_date.to_rfc2822()))
        .guid(Some(guid))
        .enclosure(Some(enclosure))
        .description(Some(episode.description_html.clone()))
        .itunes_ext(Some(itunes))
        .build()
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|s| !s.is_empty())
}
