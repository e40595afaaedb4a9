use crate::*;

pub fn handle_runtime_commands(
    cli: &Cli,
    catalog: &Catalog,
    config: &ConfigFile,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Search {
            query,
            category,
            sort,
        } => {
            let sort = sort.unwrap_or_else(|| default_sort(config));
            let results = query_places(
                &catalog.places,
                query.as_deref().unwrap_or(""),
                *category,
                sort,
            );
            print_out(
                cli.json,
                &results,
                "no places found (try adjusting your search or filters)",
                |p| {
                    format!(
                        "{}\t{}\t{}\t{:.1}\t{}%",
                        p.id, p.name, p.category, p.rating, p.accessibility_score
                    )
                },
            )?;
        }
        Commands::Show { place } => {
            let p = find_place(catalog, place)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut { ok: true, data: p })?
                );
            } else {
                println!("name: {}", p.name);
                println!("category: {}", p.category);
                println!("address: {}", p.address);
                println!("rating: {:.1} ({} reviews)", p.rating, p.review_count);
                println!("accessibility: {}%", p.accessibility_score);
                if !p.features.is_empty() {
                    println!("features: {}", p.features.join(", "));
                }
                println!("distance: {}", p.distance);
                if let Some(d) = &p.accessibility_details {
                    println!(
                        "mobility: {}%  vision: {}%  hearing: {}%  cognitive: {}%",
                        d.mobility, d.vision, d.hearing, d.cognitive
                    );
                }
            }
        }
        Commands::Review {
            place,
            new_place,
            name,
            place_type,
            address,
            phone,
            website,
            rating,
            text,
            mobility,
            vision,
            hearing,
            cognitive,
            features,
            recommend,
            visit_date,
        } => {
            let target = if *new_place {
                ReviewTarget::NewPlace {
                    place: PlaceDraft {
                        name: name.clone().unwrap_or_default(),
                        category: *place_type,
                        address: address.clone().unwrap_or_default(),
                        phone: phone.clone(),
                        website: website.clone(),
                    },
                }
            } else {
                let id = place
                    .ok_or_else(|| anyhow::anyhow!("pass --place <id> or --new-place"))?;
                let p = find_place_by_id(catalog, id)?;
                ReviewTarget::ExistingPlace { id: p.id }
            };
            let draft = ReviewDraft {
                target,
                rating: *rating,
                accessibility: AccessibilityRatings {
                    mobility: *mobility,
                    vision: *vision,
                    hearing: *hearing,
                    cognitive: *cognitive,
                },
                features: features.clone(),
                text: text.clone(),
                recommend: *recommend,
                visit_date: visit_date.clone(),
            };
            let mut reviews = load_reviews()?;
            let stored = submit_review(draft, &reviews)?;
            reviews.push(stored.clone());
            save_reviews(&reviews)?;
            audit(
                "review_submit",
                serde_json::json!({"review": stored.id.clone(), "rating": stored.draft.rating}),
            );
            print_one(cli.json, stored, |r| format!("review {} recorded", r.id))?;
        }
        Commands::Reviews { place } => {
            let mut reviews = load_reviews()?;
            if let Some(filter) = place {
                reviews.retain(|r| {
                    matches!(&r.draft.target, ReviewTarget::ExistingPlace { id } if id == filter)
                });
            }
            print_out(cli.json, &reviews, "no reviews recorded", |r| {
                format!("{}\t{}\t{}", r.id, r.draft.rating, r.draft.text)
            })?;
        }
        Commands::Categories => {
            let labels: Vec<String> = PlaceCategory::all()
                .iter()
                .map(|c| c.label().to_string())
                .collect();
            print_out(cli.json, &labels, "", |l| l.clone())?;
        }
        Commands::Features => {
            let features: Vec<String> =
                FEATURE_CATALOG.iter().map(|f| f.to_string()).collect();
            print_out(cli.json, &features, "", |f| f.clone())?;
        }
        Commands::Validate => {
            validate(catalog)?;
            print_one(cli.json, "valid", |_| "catalog valid".to_string())?;
        }
    }

    Ok(())
}
