//! Ops command handler: show what the builders produce without executing.

use color_eyre::Result;

use crate::graphql::{
    build_list_operation, build_merge_operation, build_relationship_operation,
};
use crate::idgen::idgen;
use crate::models::{Bill, Committee, GraphEntity, LocalDateTime, Minutes, News, Speech, Url};
use crate::schema::Registry;

use super::App;

impl App {
    /// Print every operation family for a set of sample entities.
    pub fn run_ops(&self) -> Result<()> {
        let registry = Registry::global();

        let bill = sample_bill(registry)?;
        let url = sample_url(registry)?;
        let news = sample_news(registry)?;
        let minutes = sample_minutes(registry)?;
        let speech = sample_speech(registry)?;
        let committee = sample_committee(registry)?;

        println!("{}\n", build_list_operation(registry, "Bill", &["name", "billNumber"])?);
        println!("{}\n", build_list_operation(registry, "Committee", &["name", "topics"])?);
        println!("{}\n", build_merge_operation(registry, &bill)?);

        for (def, from, to) in [
            (registry.relationship("Url", "referredBills")?, url.id(), bill.id()),
            (registry.relationship("News", "referredBills")?, news.id(), bill.id()),
            (
                registry.relationship("Speech", "belongedToMinutes")?,
                speech.id(),
                minutes.id(),
            ),
            (
                registry.relationship("Minutes", "discussedBills")?,
                minutes.id(),
                bill.id(),
            ),
            (
                registry.relationship("Minutes", "belongedToCommittee")?,
                minutes.id(),
                committee.id(),
            ),
        ] {
            // Sample ids are always assigned above
            let (from, to) = (from.unwrap_or_default(), to.unwrap_or_default());
            println!("{}\n", build_relationship_operation(def, from, to));
        }

        Ok(())
    }
}

fn sample_bill(registry: &Registry) -> Result<Bill> {
    let mut bill = Bill::new();
    bill.name = Some("公文書等の管理に関する法律の一部を改正する法律案".to_string());
    bill.bill_number = Some("第195回衆法第4号".to_string());
    bill.submitted_date = Some(LocalDateTime::ymd(2020, 1, 1));
    bill.id = Some(idgen(registry, &bill)?);
    Ok(bill)
}

fn sample_url(registry: &Registry) -> Result<Url> {
    let mut url = Url::new();
    url.url = Some(
        "http://www.shugiin.go.jp/internet/itdb_gian.nsf/html/gian/honbun/g19505004.htm"
            .to_string(),
    );
    url.id = Some(idgen(registry, &url)?);
    Ok(url)
}

fn sample_news(registry: &Registry) -> Result<News> {
    let mut news = News::new();
    news.url = Some("https://www.nikkei.com/article/DGXMZO64119940S0A920C2000000/".to_string());
    news.id = Some(idgen(registry, &news)?);
    Ok(news)
}

fn sample_minutes(registry: &Registry) -> Result<Minutes> {
    let mut minutes = Minutes::new();
    minutes.name = Some("第201回国会衆議院環境委員会第4号".to_string());
    minutes.topics = Some(vec!["天気について".to_string(), "カレーライスの件".to_string()]);
    minutes.id = Some(idgen(registry, &minutes)?);
    Ok(minutes)
}

fn sample_speech(registry: &Registry) -> Result<Speech> {
    let mut speech = Speech::new();
    speech.name = Some("第201回国会衆議院環境委員会第4号3".to_string());
    speech.id = Some(idgen(registry, &speech)?);
    Ok(speech)
}

fn sample_committee(registry: &Registry) -> Result<Committee> {
    let mut committee = Committee::new();
    committee.name = Some("衆議院環境委員会".to_string());
    committee.topics = Some(vec!["環境省の所管に属する事項".to_string()]);
    committee.id = Some(idgen(registry, &committee)?);
    Ok(committee)
}
