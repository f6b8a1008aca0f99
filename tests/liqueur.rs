use approx::assert_abs_diff_eq;
use liqueur::{
    Basis, Composition, DENSITY_SUCROSE, Ingredient, Kind, Liqueur, LiqueurError, Measure,
    Priority, Recipe, Settings,
};
use proptest::prelude::*;

fn abv(v: f64) -> Ingredient {
    Ingredient::alcohol(v, Measure::Abv).unwrap()
}

fn brix(v: f64) -> Ingredient {
    Ingredient::syrup(v, Measure::Brix).unwrap()
}

/// 24 % vol, 250 g/L.
fn target() -> Liqueur {
    Liqueur::new(
        Some(abv(24.0)),
        Some(Ingredient::syrup(0.25, Measure::MassConcentration).unwrap()),
    )
    .unwrap()
}

/// Vin à 12 % + sirop 2:1, avec vodka et sucre pur en secours.
fn pantry() -> Recipe {
    Recipe::new()
        .alcohol(abv(12.0))
        .syrup(brix(66.67))
        .fallback_alcohol(abv(40.0))
        .fallback_syrup(brix(100.0))
        .basis(Basis::total(1.0, Measure::Liter))
}

fn ids(c: &Composition) -> Vec<&str> {
    c.iter().map(|(id, _)| id).collect()
}

// ═══════════════════════════════════════════════════════════════════
//  Bout en bout
// ═══════════════════════════════════════════════════════════════════

#[test]
fn syrup_first_hits_the_target() {
    let batch = target().make(&pantry().priority(Priority::Syrup)).unwrap();
    let info = batch.info(None).unwrap();

    assert!((info.abv - 24.0).abs() < 0.1, "ABV = {:.4}", info.abv);
    assert!(
        (info.sugar_concentration() - 250.0).abs() < 1.0,
        "sucre = {:.3} g/L",
        info.sugar_concentration()
    );
    assert_abs_diff_eq!(info.volume, 1000.0, epsilon = 1e-6);

    // Le sirop 2:1 suffit seul ; l'alcool doit être coupé à la vodka
    assert_eq!(ids(&batch), ["syrup", "alcohol", "fallback_alcohol", "buffer"]);
    let syrup = batch.component("syrup").unwrap().volume();
    assert!((syrup - 282.6).abs() < 0.5, "sirop = {syrup:.2} mL");
    let buffer = batch.component("buffer").unwrap().volume();
    assert!(buffer >= 0.0 && buffer < 1.0, "tampon = {buffer:.4} mL");
}

#[test]
fn alcohol_first_blends_both_axes() {
    let batch = target().make(&pantry()).unwrap();
    let info = batch.info(None).unwrap();

    assert!((info.abv - 24.0).abs() < 0.1, "ABV = {:.4}", info.abv);
    assert!((info.sugar_concentration() - 250.0).abs() < 1.0);
    assert_eq!(
        ids(&batch),
        ["alcohol", "fallback_alcohol", "syrup", "fallback_syrup", "buffer"]
    );
}

#[test]
fn scale_to_keeps_intensive_properties() {
    let mut batch = target().make(&pantry().priority(Priority::Syrup)).unwrap();
    let before = batch.info(None).unwrap();

    batch.scale_to(700.0, Measure::Milliliter).unwrap();
    let after = batch.info(None).unwrap();

    assert_abs_diff_eq!(batch.total(Measure::Milliliter).unwrap(), 700.0, epsilon = 1e-9);
    assert_abs_diff_eq!(after.abv, before.abv, epsilon = 1e-9);
    assert_abs_diff_eq!(
        after.sugar_concentration(),
        before.sugar_concentration(),
        epsilon = 1e-9
    );
}

#[test]
fn basis_on_the_primary_alcohol() {
    // Toute la bouteille de vin (750 mL) part dans la recette
    let recipe = pantry().priority(Priority::Syrup).basis(Basis::alcohol(750.0, Measure::Milliliter));
    let batch = target().make(&recipe).unwrap();
    let wine = batch.component("alcohol").unwrap().volume();
    assert_abs_diff_eq!(wine, 750.0, epsilon = 1e-9);

    let info = batch.info(None).unwrap();
    assert!((info.abv - 24.0).abs() < 0.1);
}

#[test]
fn lone_fallback_is_promoted() {
    let recipe = Recipe::new()
        .fallback_alcohol(abv(40.0))
        .syrup(brix(66.67))
        .basis(Basis::total(0.5, Measure::Liter));
    let batch = target().make(&recipe).unwrap();
    assert!(batch.component("alcohol").is_some());
    assert!(batch.component("fallback_alcohol").is_none());
    assert_abs_diff_eq!(batch.total(Measure::Liter).unwrap(), 0.5, epsilon = 1e-12);
}

#[test]
fn custom_buffer_and_virtual_extras() {
    let juice = Ingredient::water().with_attr("name", "jus de cassis");
    let recipe = pantry().priority(Priority::Syrup).buffer(juice);
    let mut batch = target().make(&recipe).unwrap();
    assert_eq!(batch.component("buffer").unwrap().ingredient().name(), Some("jus de cassis"));

    // Les épices n'entrent dans aucun total
    let spice = liqueur::Component::new(Ingredient::inert(), 15.0, Measure::Gram).unwrap();
    let volume = batch.total(Measure::Milliliter).unwrap();
    batch.add("spice", spice).unwrap();
    assert_eq!(batch.total(Measure::Milliliter).unwrap(), volume);
}

#[test]
fn stricter_settings_still_converge() {
    let settings = Settings::default().alcohol_precision(1e-9).sugar_precision(1e-9);
    let batch = target().make_with(&pantry(), &settings).unwrap();
    let info = batch.info(None).unwrap();
    assert!((info.abv - 24.0).abs() < 0.01);
}

// ═══════════════════════════════════════════════════════════════════
//  Erreurs
// ═══════════════════════════════════════════════════════════════════

#[test]
fn missing_ingredients() {
    let no_alcohol = Recipe::new().syrup(brix(66.67));
    assert_eq!(target().make(&no_alcohol).unwrap_err(), LiqueurError::InsufficientAlcohol);

    let no_syrup = Recipe::new().alcohol(abv(40.0));
    assert_eq!(target().make(&no_syrup).unwrap_err(), LiqueurError::InsufficientSugar);

    // Vin seul : il faudrait deux litres de vin par litre
    let weak = Recipe::new().alcohol(abv(12.0)).syrup(brix(66.67));
    assert_eq!(target().make(&weak).unwrap_err(), LiqueurError::ImpossibleCombination);

    // Alcool à 0 % : part infinie
    let dry = Recipe::new().alcohol(abv(0.0)).syrup(brix(66.67));
    assert_eq!(target().make(&dry).unwrap_err(), LiqueurError::InsufficientAlcohol);
}

#[test]
fn unreachable_profile_is_impossible() {
    // 45 % vol et 600 g/L ne tiennent pas avec une eau-de-vie à 65 % et du sirop 2:1
    let heavy = Liqueur::new(
        Some(abv(45.0)),
        Some(Ingredient::syrup(0.6, Measure::MassConcentration).unwrap()),
    )
    .unwrap();
    let recipe = Recipe::new().alcohol(abv(65.0)).syrup(brix(66.67));
    assert_eq!(heavy.make(&recipe).unwrap_err(), LiqueurError::ImpossibleCombination);
}

#[test]
fn basis_without_its_component() {
    let sugar_only = Liqueur::new(None, Some(brix(20.0))).unwrap();
    let recipe = Recipe::new()
        .syrup(brix(66.67))
        .basis(Basis::alcohol(1.0, Measure::Liter));
    assert_eq!(
        sugar_only.make(&recipe).unwrap_err(),
        LiqueurError::BasisAlcoholWithoutAlcohol
    );

    let spirit_only = Liqueur::new(Some(abv(20.0)), None).unwrap();
    let recipe = Recipe::new()
        .alcohol(abv(40.0))
        .basis(Basis::syrup(1.0, Measure::Liter));
    assert_eq!(
        spirit_only.make(&recipe).unwrap_err(),
        LiqueurError::BasisSugarWithoutSugar
    );
}

#[test]
fn wrong_slot_kind() {
    let recipe = Recipe::new().alcohol(brix(50.0)).syrup(brix(66.67));
    assert!(matches!(
        target().make(&recipe),
        Err(LiqueurError::IngredientMismatch { expected: Kind::Alcohol, found: Kind::Syrup })
    ));
}

#[test]
fn full_litre_boundary() {
    let sucrose = Ingredient::syrup(DENSITY_SUCROSE, Measure::MassConcentration).unwrap();
    assert!(Liqueur::new(None, Some(sucrose.clone())).is_ok());
    assert_eq!(
        Liqueur::new(Some(abv(0.1)), Some(sucrose)).unwrap_err(),
        LiqueurError::ImpossibleCombination
    );
}

// ═══════════════════════════════════════════════════════════════════
//  Conservation
// ═══════════════════════════════════════════════════════════════════

fn non_virtual_volume(batch: &Composition) -> f64 {
    batch
        .iter()
        .filter(|(_, c)| !c.is(Kind::Virtual))
        .map(|(_, c)| c.volume())
        .sum()
}

#[test]
fn both_priorities_fill_the_requested_volume() {
    for priority in [Priority::Alcohol, Priority::Syrup] {
        let recipe = pantry().priority(priority).basis(Basis::total(2.5, Measure::Liter));
        let batch = target().make(&recipe).unwrap();
        assert_abs_diff_eq!(non_virtual_volume(&batch), 2500.0, epsilon = 1e-6);
        assert!(batch.iter().all(|(_, c)| c.weight() >= 0.0));
    }
}

proptest! {
    #[test]
    fn volume_is_conserved(
        target_abv in 5.0_f64..35.0,
        target_wv in 0.05_f64..0.35,
        main_abv in 8.0_f64..20.0,
        main_brix in 40.0_f64..70.0,
        litres in 0.1_f64..5.0,
        syrup_first in any::<bool>(),
    ) {
        let liqueur = Liqueur::new(
            Some(abv(target_abv)),
            Some(Ingredient::syrup(target_wv, Measure::MassConcentration).unwrap()),
        ).unwrap();
        let priority = if syrup_first { Priority::Syrup } else { Priority::Alcohol };
        let recipe = Recipe::new()
            .alcohol(abv(main_abv))
            .syrup(brix(main_brix))
            .fallback_alcohol(abv(96.0))
            .fallback_syrup(brix(100.0))
            .priority(priority)
            .basis(Basis::total(litres, Measure::Liter));

        // Toutes les combinaisons ne sont pas réalisables ; proptest échoue
        // si trop de cas sont rejetés.
        let result = liqueur.make(&recipe);
        prop_assume!(result.is_ok());
        let batch = result.unwrap();
        prop_assert!((non_virtual_volume(&batch) - litres * 1000.0).abs() < 1e-6 * litres * 1000.0);
        for (id, c) in batch.iter() {
            prop_assert!(c.weight() >= 0.0, "{id} has negative weight");
        }
    }
}
