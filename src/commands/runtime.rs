use crate::*;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config()?;
    let backend = Backend::new(resolve_backend(cli.api_base.as_deref(), &config));
    let mut studio = Studio::default();

    match &cli.command {
        Commands::Preview {
            front,
            back,
            accent,
        } => {
            apply_colors(&mut studio.design, front, back, accent)?;
            let preview = render_preview(&studio.design);
            print_rows(cli.json, &[preview.front, preview.back], |panel| {
                format!("{}\t{}\taccent {}", panel.label, panel.fill, panel.accent_wash)
            })?;
        }
        Commands::Roster { command } => match command {
            RosterCommands::Check { file } => {
                let roster = load_roster_file(file)?;
                let report = RosterCheckReport {
                    file: roster.file_name.clone(),
                    data_rows: roster.data_rows,
                    bytes: roster.bytes.len(),
                };
                print_one(cli.json, &report, |r| {
                    format!("{}: {} data rows", r.file, r.data_rows)
                })?;
            }
            RosterCommands::Import {
                file,
                team_name,
                sport,
            } => {
                let roster = load_roster_file(file)?;
                let (team_name, sport) =
                    resolve_team_metadata(team_name.as_deref(), sport.as_deref(), &config);
                let state = studio.import_roster(&backend, &roster, &team_name, &sport);
                match state {
                    RequestState::Success { value, .. } => {
                        audit(
                            "roster_import",
                            serde_json::json!({
                                "file": roster.file_name,
                                "team_name": team_name,
                                "sport": sport,
                                "count": value.count,
                            }),
                        );
                        print_one(cli.json, value, |r| format!("imported {} players", r.count))?;
                    }
                    RequestState::Failed { error, .. } => {
                        anyhow::bail!("roster import failed: {error}")
                    }
                    RequestState::Idle | RequestState::Pending { .. } => {
                        unreachable!("blocking request always completes")
                    }
                }
            }
        },
        Commands::Logo { command } => match command {
            LogoCommands::Generate { prompt } => {
                let state = studio.generate_logo(&backend, prompt)?;
                match state {
                    RequestState::Success { value, .. } => {
                        audit(
                            "logo_generate",
                            serde_json::json!({ "prompt": prompt, "logo_url": value.logo_url }),
                        );
                        print_one(cli.json, value, |l| {
                            format!(
                                "logo: {}\n{}",
                                l.logo_url,
                                serde_json::to_string_pretty(&l.suggested_positions)
                                    .unwrap_or_default()
                            )
                        })?;
                    }
                    RequestState::Failed { error, .. } => {
                        anyhow::bail!("logo generation failed: {error}")
                    }
                    RequestState::Idle | RequestState::Pending { .. } => {
                        unreachable!("blocking request always completes")
                    }
                }
            }
        },
        Commands::Order { command } => match command {
            OrderCommands::Place {
                customer_name,
                customer_email,
                customer_phone,
                shipping_address,
                front,
                back,
                accent,
                quantity,
                method,
                team_id,
                template_id,
                logo_url,
                dry_run,
            } => {
                apply_colors(&mut studio.design, front, back, accent)?;
                studio.design.set_quantity_input(quantity);

                let buyer = BuyerDetails {
                    name: customer_name.clone(),
                    email: customer_email.clone(),
                    phone: customer_phone.clone(),
                    shipping_address: shipping_address.clone(),
                };
                let logo = logo_url.as_ref().map(|url| LogoResult {
                    logo_url: url.clone(),
                    suggested_positions: serde_json::Value::Null,
                });
                let qty = studio.design.order_quantity();
                let method_tag = format!("{:?}", method).to_lowercase();

                if *dry_run {
                    let payload = studio.assemble_order(
                        &buyer,
                        method.clone(),
                        team_id.clone(),
                        template_id.clone(),
                        logo.as_ref(),
                    );
                    print_one(cli.json, &payload, |p| {
                        format!("dry run: {} jerseys via {method_tag} for {}", p.quantity, p.customer_name)
                    })?;
                    return Ok(());
                }

                let state = studio.place_order(
                    &backend,
                    &buyer,
                    method.clone(),
                    team_id.clone(),
                    template_id.clone(),
                    logo.as_ref(),
                );
                match state {
                    RequestState::Success { value, .. } => {
                        audit(
                            "order_place",
                            serde_json::json!({
                                "order_id": value.order_id,
                                "quantity": qty,
                                "method": method_tag,
                            }),
                        );
                        print_one(cli.json, value, |r| {
                            format!("order created for ₹{}\norder id: {}", r.amount, r.order_id)
                        })?;
                    }
                    RequestState::Failed { error, .. } => anyhow::bail!("checkout failed: {error}"),
                    RequestState::Idle | RequestState::Pending { .. } => {
                        unreachable!("blocking request always completes")
                    }
                }
            }
        },
    }

    Ok(())
}

fn apply_colors(
    design: &mut DesignState,
    front: &Option<String>,
    back: &Option<String>,
    accent: &Option<String>,
) -> anyhow::Result<()> {
    if let Some(c) = front {
        design.set_front(c.parse()?);
    }
    if let Some(c) = back {
        design.set_back(c.parse()?);
    }
    if let Some(c) = accent {
        design.set_accent(c.parse()?);
    }
    Ok(())
}
