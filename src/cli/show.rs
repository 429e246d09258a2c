use clap::Args;
use serde::Serialize;

use crate::cli::render::{print_matches_text, EntryView};
use crate::cli::{tsv_field, Context, OutputFormat};
use crate::core::detail::MonsterDetail;
use crate::core::types::MonsterId;
use crate::matching::MatchingEngine;

#[derive(Args)]
pub struct ShowArgs {
    /// Monster id from the SRD index (e.g. "adult-black-dragon")
    #[arg(required = true)]
    pub id: String,
}

#[derive(Serialize)]
struct ShowView<'a> {
    monster: &'a MonsterDetail,
    tier: Option<&'static str>,
    matches: Vec<EntryView<'a>>,
}

/// Execute the show subcommand
///
/// # Errors
///
/// Returns an error if the detail record or the catalog cannot be loaded.
pub async fn run(args: ShowArgs, ctx: &Context, format: OutputFormat) -> anyhow::Result<()> {
    let id = MonsterId::new(args.id.trim().to_lowercase());
    let detail = ctx.source.fetch_monster_detail(&id).await?;
    let catalog = ctx.catalog.get_or_load().await?;

    let engine = MatchingEngine::new(&catalog);
    let result = engine.find_matches(&detail.name);

    match format {
        OutputFormat::Text => {
            print_detail_text(&detail);
            println!();
            print_matches_text(&detail.name, &result);
        }
        OutputFormat::Json => {
            let view = ShowView {
                monster: &detail,
                tier: result.tier.map(|t| t.label()),
                matches: result.iter().map(EntryView::from).collect(),
            };
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Tsv => {
            println!("id\tname\tsize\ttype\tarmor_class\thit_points\tchallenge\tstl_matches");
            let matches: Vec<String> = result.iter().map(|e| tsv_field(&e.name)).collect();
            println!(
                "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                detail.index,
                tsv_field(&detail.name),
                detail.size,
                tsv_field(&detail.creature_type),
                detail.armor_class.best().map(|ac| ac.to_string()).unwrap_or_default(),
                detail.hit_points,
                detail.challenge_label().unwrap_or_default(),
                matches.join("; ")
            );
        }
    }

    Ok(())
}

fn print_detail_text(detail: &MonsterDetail) {
    println!("{}", detail.name);
    println!("   ID: {}", detail.index);

    let kind = match &detail.subtype {
        Some(subtype) => format!("{} {} ({subtype})", detail.size, detail.creature_type),
        None => format!("{} {}", detail.size, detail.creature_type),
    };
    if detail.alignment.is_empty() {
        println!("   {kind}");
    } else {
        println!("   {kind}, {}", detail.alignment);
    }

    println!("   Armor Class: {}", detail.armor_class);
    match &detail.hit_dice {
        Some(dice) => println!("   Hit Points: {} ({dice})", detail.hit_points),
        None => println!("   Hit Points: {}", detail.hit_points),
    }
    if let Some(cr) = detail.challenge_label() {
        match detail.xp {
            Some(xp) => println!("   Challenge: {cr} ({xp} XP)"),
            None => println!("   Challenge: {cr}"),
        }
    }
    if !detail.damage_immunities.is_empty() {
        println!(
            "   Damage Immunities: {}",
            detail.damage_immunities.join(", ")
        );
    }
    if !detail.condition_immunities.is_empty() {
        let names: Vec<&str> = detail
            .condition_immunities
            .iter()
            .map(|c| c.name())
            .collect();
        println!("   Condition Immunities: {}", names.join(", "));
    }
}
