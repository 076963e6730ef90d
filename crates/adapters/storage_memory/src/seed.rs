//! Catalog seed data.
//!
//! The built-in seed is the launch catalog for Côte d'Ivoire. A JSON file
//! with the same `{"services": [...], "agencies": [...]}` layout replaces it
//! wholesale when configured.

use std::path::Path;

use maisonci_domain::agency::Agency;
use maisonci_domain::catalog::{Catalog, CatalogSeed};
use maisonci_domain::service::Service;

use crate::error::StorageError;

const CLEANING_IMAGE: &str =
    "/attached_assets/generated_images/Professional_cleaning_service_photo_2a582859.png";
const GARDENING_IMAGE: &str =
    "/attached_assets/generated_images/Gardening_service_photo_0007b568.png";
const ABIDJAN_IMAGE: &str =
    "/attached_assets/generated_images/Abidjan_agency_storefront_41598fcd.png";
const BOUAKE_IMAGE: &str =
    "/attached_assets/generated_images/Bouaké_agency_storefront_efadb467.png";

/// The built-in catalog: three services and six agencies.
///
/// # Errors
///
/// Returns [`StorageError`] if a built-in record fails validation.
pub fn default_catalog() -> Result<Catalog, StorageError> {
    let services = default_services().map_err(StorageError::Record)?;
    let agencies = default_agencies().map_err(StorageError::Record)?;
    Ok(Catalog::new(services, agencies)?)
}

/// Read a catalog from a JSON seed file.
///
/// # Errors
///
/// Returns [`StorageError`] if the file cannot be read or decoded, or if
/// the decoded records break catalog invariants.
pub fn load(path: &Path) -> Result<Catalog, StorageError> {
    let raw = std::fs::read_to_string(path)?;
    let seed: CatalogSeed = serde_json::from_str(&raw)?;
    let catalog = Catalog::try_from(seed)?;
    tracing::info!(
        path = %path.display(),
        services = catalog.services().len(),
        agencies = catalog.agencies().len(),
        "loaded catalog seed file"
    );
    Ok(catalog)
}

fn default_services() -> Result<Vec<Service>, maisonci_domain::error::MaisonError> {
    Ok(vec![
        Service::builder()
            .id(1)
            .nom("Ménage à domicile")
            .description(
                "Service complet de ménage et d'entretien régulier ou ponctuel pour votre maison.",
            )
            .icone("Sparkles")
            .build()?,
        Service::builder()
            .id(2)
            .nom("Garde d'enfants")
            .description(
                "Des professionnels de confiance pour la garde d'enfants à domicile en toute sécurité.",
            )
            .icone("Baby")
            .build()?,
        Service::builder()
            .id(3)
            .nom("Jardinage")
            .description(
                "Entretien, taille, tonte et aménagement de vos espaces verts par des experts.",
            )
            .icone("TreeDeciduous")
            .build()?,
    ])
}

fn default_agencies() -> Result<Vec<Agency>, maisonci_domain::error::MaisonError> {
    Ok(vec![
        Agency::builder()
            .id(1)
            .nom("Service Pro Abidjan")
            .ville("Abidjan")
            .services(["Ménage", "Repassage", "Garde d'enfants"])
            .description(
                "Agence de services à domicile de confiance basée à Abidjan. Nous proposons des \
                 prestations de qualité avec des professionnels qualifiés et vérifiés.",
            )
            .image(ABIDJAN_IMAGE)
            .horaires("Lundi - Samedi : 7h00 - 19h00")
            .telephone("+225 27 20 12 34 56")
            .email("contact@servicepro-abidjan.ci")
            .build()?,
        Agency::builder()
            .id(2)
            .nom("Maison Plus Bouaké")
            .ville("Bouaké")
            .services(["Ménage", "Jardinage"])
            .description(
                "Prestataire local spécialisé dans l'entretien des maisons et des jardins. \
                 Service rapide et personnalisé pour tous vos besoins.",
            )
            .image(BOUAKE_IMAGE)
            .horaires("Lundi - Vendredi : 8h00 - 18h00")
            .telephone("+225 31 63 45 78 90")
            .email("info@maisonplus-bouake.ci")
            .build()?,
        Agency::builder()
            .id(3)
            .nom("Excellence Services Abidjan")
            .ville("Abidjan")
            .services(["Ménage", "Garde d'enfants", "Jardinage", "Repassage"])
            .description(
                "L'excellence au service de votre quotidien. Une équipe dédiée pour tous vos \
                 besoins domestiques avec un service premium.",
            )
            .image(ABIDJAN_IMAGE)
            .horaires("Lundi - Dimanche : 6h00 - 21h00")
            .telephone("+225 27 20 98 76 54")
            .email("contact@excellence-abidjan.ci")
            .build()?,
        Agency::builder()
            .id(4)
            .nom("Famille & Maison Yamoussoukro")
            .ville("Yamoussoukro")
            .services(["Garde d'enfants", "Ménage"])
            .description(
                "Services familiaux de qualité pour votre tranquillité d'esprit. \
                 Professionnels expérimentés et de confiance.",
            )
            .image(CLEANING_IMAGE)
            .horaires("Lundi - Samedi : 7h00 - 19h00")
            .telephone("+225 30 64 12 34 56")
            .email("contact@famille-maison.ci")
            .build()?,
        Agency::builder()
            .id(5)
            .nom("Jardin Vert Bouaké")
            .ville("Bouaké")
            .services(["Jardinage"])
            .description(
                "Spécialistes de l'entretien et de l'aménagement paysager. \
                 Votre jardin mérite les meilleurs soins.",
            )
            .image(GARDENING_IMAGE)
            .horaires("Lundi - Samedi : 6h00 - 17h00")
            .telephone("+225 31 63 78 90 12")
            .email("contact@jardinvert-bouake.ci")
            .build()?,
        Agency::builder()
            .id(6)
            .nom("Confort Home Abidjan")
            .ville("Abidjan")
            .services(["Ménage", "Repassage"])
            .description(
                "Votre confort est notre priorité. \
                 Services de nettoyage et de repassage de haute qualité.",
            )
            .image(CLEANING_IMAGE)
            .horaires("Lundi - Vendredi : 7h00 - 19h00")
            .telephone("+225 27 20 55 44 33")
            .email("info@confort-home.ci")
            .build()?,
    ])
}
