//! Create command - fill a draft, upload images and publish the listing

use crate::cli::CliProgress;
use crate::cli::style::{Stylize, check};
use dialoguer::Confirm;
use estate_lister::auth::get_user_auth;
use estate_lister::config::Config;
use estate_lister::draft::{DraftStore, FieldChange};
use estate_lister::error::{Error, Result};
use estate_lister::listing::{HttpListingService, ListingPayload};
use estate_lister::session::ListingEditor;
use estate_lister::submit::SubmitOutcome;
use estate_lister::types::{ImageFile, ListingDraft};
use estate_lister::upload::CloudinaryUploader;
use estate_lister::validate::validate;
use std::path::{Path, PathBuf};
use url::Url;

/// Form values as typed on the command line
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct FormFields {
    /// Listing title
    pub name: String,
    /// Description
    pub description: String,
    /// Street address
    pub address: String,
    /// "sale" or "rent"
    pub kind: &'static str,
    /// Bedroom count
    pub bedrooms: Option<String>,
    /// Bathroom count
    pub bathrooms: Option<String>,
    /// Regular price
    pub regular_price: Option<String>,
    /// Discounted price
    pub discount_price: Option<String>,
    /// Offer flag
    pub offer: bool,
    /// Parking flag
    pub parking: bool,
    /// Furnished flag
    pub furnished: bool,
}

/// Options for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Draft fields
    pub fields: FormFields,
    /// Images to upload, cover first
    pub images: Vec<PathBuf>,
    /// Dry run - validate and print the request without network calls
    pub dry_run: bool,
    /// Prompt for confirmation before publishing
    pub confirm: bool,
}

/// Replay the command-line values as form edits
fn fill_draft(fields: &FormFields) -> Result<DraftStore> {
    let mut store = DraftStore::new();
    let mut edits = vec![
        FieldChange::from_input("name", &fields.name, false)?,
        FieldChange::from_input("description", &fields.description, false)?,
        FieldChange::from_input("address", &fields.address, false)?,
        FieldChange::from_input(fields.kind, "", true)?,
        FieldChange::from_input("offer", "", fields.offer)?,
        FieldChange::from_input("parking", "", fields.parking)?,
        FieldChange::from_input("furnished", "", fields.furnished)?,
    ];
    for (id, value) in [
        ("bedrooms", &fields.bedrooms),
        ("bathrooms", &fields.bathrooms),
        ("regularPrice", &fields.regular_price),
        ("discountPrice", &fields.discount_price),
    ] {
        if let Some(value) = value {
            edits.push(FieldChange::from_input(id, value, false)?);
        }
    }
    for edit in edits {
        store.set_field(edit);
    }
    Ok(store)
}

/// Run the create command
///
/// Returns whether the listing was created (or, in a dry run, is valid).
/// Workflow failures have already been reported through the progress output.
pub async fn run_create(config: &Config, options: CreateOptions) -> Result<bool> {
    let mut store = fill_draft(&options.fields)?;

    if options.dry_run {
        dry_run(config, &mut store, &options.images)?;
        return Ok(true);
    }

    let auth = get_user_auth(config)?;

    let mut files = Vec::with_capacity(options.images.len());
    for path in &options.images {
        files.push(ImageFile::from_path(path).await?);
    }

    let uploader = CloudinaryUploader::from_config(config)?;
    let listings = HttpListingService::from_config(config)?;
    let api_base = Url::parse(&config.api_base_url)
        .map_err(|e| Error::Config(format!("invalid api_base_url: {e}")))?;
    let progress = CliProgress::new(api_base);

    let mut editor = ListingEditor::with_store(store, &uploader, &listings, auth.user_id, &progress);

    if !files.is_empty() {
        progress.start_spinner(format!(
            "Uploading {} image{}...",
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        ));
        let uploaded = editor.upload_images(&files).await;
        progress.finish_spinner();
        if !uploaded {
            return Ok(false);
        }
    }

    if options.confirm {
        print_summary(editor.draft());
        if !Confirm::new()
            .with_prompt("Publish this listing?")
            .default(true)
            .interact()
            .map_err(|e| Error::Io(std::io::Error::other(format!("Failed to read confirmation: {e}"))))?
        {
            anstream::println!("Aborted");
            return Ok(false);
        }
        anstream::println!();
    }

    Ok(matches!(editor.submit().await, SubmitOutcome::Created(_)))
}

/// Validate with local file URLs standing in for uploads and print the
/// request that would be sent
fn dry_run(config: &Config, store: &mut DraftStore, images: &[PathBuf]) -> Result<()> {
    let urls = images
        .iter()
        .map(|p| local_url(p))
        .collect::<Result<Vec<_>>>()?;
    if store.image_count() + urls.len() > estate_lister::types::MAX_IMAGES {
        return Err(Error::BatchTooLarge);
    }
    store.append_images(urls);

    validate(store.draft())?;

    let user_ref = get_user_auth(config).map_or_else(|_| "<signed-out>".to_string(), |a| a.user_id);
    let payload = ListingPayload::from_draft(store.draft(), &user_ref)?;

    anstream::println!("{} Draft is valid", check());
    anstream::println!(
        "{} POST {}",
        "Would send:".muted(),
        config.api_url(estate_lister::listing::CREATE_PATH)?
    );
    anstream::println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn local_url(path: &Path) -> Result<String> {
    let absolute = std::fs::canonicalize(path)?;
    Url::from_file_path(&absolute)
        .map(String::from)
        .map_err(|()| Error::Config(format!("cannot use {} as an image", absolute.display())))
}

fn print_summary(draft: &ListingDraft) {
    anstream::println!("{}", draft.name.emphasis());
    anstream::println!("  {} {}", "Address:".muted(), draft.address);
    anstream::println!("  {} {}", "Type:".muted(), draft.listing_type);
    anstream::println!(
        "  {} {} bed / {} bath",
        "Rooms:".muted(),
        draft.bedrooms,
        draft.bathrooms
    );
    if draft.offer {
        anstream::println!(
            "  {} {} (was {})",
            "Price:".muted(),
            draft.discount_price,
            draft.regular_price
        );
    } else {
        anstream::println!("  {} {}", "Price:".muted(), draft.regular_price);
    }
    anstream::println!("  {} {}", "Images:".muted(), draft.image_urls.len());
}
