use crate::component::Component;
use crate::error::{LiqueurError, Result};
use crate::ingredient::Kind;
use crate::measure::Measure;
use crate::properties::CompositionInfo;

/// Volume [`reference`](Composition::reference) rescales to, in mL.
pub const REFERENCE_VOLUME: f64 = 1000.0;

/// Ordered collection of uniquely named components.
///
/// Insertion order is kept for display.  Virtual components scale with
/// the batch but are left out of every total.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Composition {
    components: Vec<(String, Component)>,
}

impl Composition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `component` under `id`; fails if `id` is taken.
    pub fn add(&mut self, id: impl Into<String>, component: Component) -> Result<&mut Self> {
        let id = id.into();
        if self.component(&id).is_some() {
            return Err(LiqueurError::DuplicateId(id));
        }
        self.components.push((id, component));
        Ok(self)
    }

    pub fn remove(&mut self, id: &str) -> Option<Component> {
        let pos = self.components.iter().position(|(k, _)| k == id)?;
        Some(self.components.remove(pos).1)
    }

    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|(k, _)| k == id).map(|(_, c)| c)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Component)> {
        self.components.iter().map(|(k, c)| (k.as_str(), c))
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn counted(&self) -> impl Iterator<Item = &Component> {
        self.components.iter().map(|(_, c)| c).filter(|c| !c.is(Kind::Virtual))
    }

    /// Sum of `measure` over the non-virtual components.
    pub fn total(&self, measure: Measure) -> Result<f64> {
        self.counted().map(|c| c.get(measure)).sum()
    }

    /// Multiply every component (virtual ones included) by `k`.
    pub fn scale(&mut self, k: f64) -> Result<()> {
        if !(k > 0.0 && k.is_finite()) {
            return Err(LiqueurError::InvalidValue(k));
        }
        for (_, c) in &mut self.components {
            c.scale(k)?;
        }
        Ok(())
    }

    /// Scale so that `total(measure) == quantity`.
    pub fn scale_to(&mut self, quantity: f64, measure: Measure) -> Result<()> {
        let total = self.total(measure)?;
        self.scale(quantity / total)
    }

    /// Totals of the composition as it stands.
    ///
    /// With `precision` every field is rounded to it.
    pub fn info(&self, precision: Option<f64>) -> Result<CompositionInfo> {
        let mut info = CompositionInfo::default();
        for c in self.counted() {
            let volume = c.volume();
            match c.kind() {
                Kind::Alcohol => info.abs_spirit += volume * c.get(Measure::VolumeFraction)?,
                Kind::Syrup => info.sugar += volume * c.get(Measure::MassConcentration)?,
                Kind::Water | Kind::Virtual => {}
            }
            info.weight += c.weight();
            info.volume += volume;
        }
        if info.volume > 0.0 {
            info.abv = info.abs_spirit / info.volume * 100.0;
            info.density = info.weight / info.volume;
        }
        Ok(match precision {
            Some(p) => info.rounded(p),
            None => info,
        })
    }

    /// [`info`](Self::info) of a copy rescaled to one litre.
    pub fn reference(&self) -> Result<CompositionInfo> {
        let mut copy = self.clone();
        copy.scale_to(REFERENCE_VOLUME, Measure::Milliliter)?;
        copy.info(None)
    }
}
