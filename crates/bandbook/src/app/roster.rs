//! The roster: bands, musicians, their membership relation, and the displayed views.

use slab::Slab;

use crate::domain::errors::DomainError;
use crate::domain::index::Index;
use crate::domain::model::{Band, BandId, Musician, MusicianId};

/// Which musicians are currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum MusicianView {
    #[default]
    All,
    /// Musicians whose name contains any keyword as a whole word.
    NameKeywords(Vec<String>),
    /// Members of any band in the displayed band list.
    MembersOfDisplayedBands,
}

/// Which bands are currently displayed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BandView {
    #[default]
    All,
    NameKeywords(Vec<String>),
}

/// Owns every band and musician, keyed by stable slab identities.
///
/// Insertion order is tracked separately from the arenas so that listings stay stable when
/// slab slots are reused. The displayed lists are recomputed after every mutation and the
/// front ends print them again afterwards, so typed positions match what was last rendered.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    musicians: Slab<Musician>,
    bands: Slab<Band>,
    musician_order: Vec<MusicianId>,
    band_order: Vec<BandId>,
    musician_view: MusicianView,
    band_view: BandView,
    displayed_musicians: Vec<MusicianId>,
    displayed_bands: Vec<BandId>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn musician_count(&self) -> usize {
        self.musicians.len()
    }

    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.musicians.is_empty() && self.bands.is_empty()
    }

    pub fn musician(&self, id: MusicianId) -> Option<&Musician> {
        self.musicians.get(id.0)
    }

    pub fn band(&self, id: BandId) -> Option<&Band> {
        self.bands.get(id.0)
    }

    /// All musicians in insertion order.
    pub fn musicians(&self) -> impl Iterator<Item = (MusicianId, &Musician)> + '_ {
        self.musician_order
            .iter()
            .filter_map(|id| self.musicians.get(id.0).map(|musician| (*id, musician)))
    }

    /// All bands in insertion order.
    pub fn bands(&self) -> impl Iterator<Item = (BandId, &Band)> + '_ {
        self.band_order
            .iter()
            .filter_map(|id| self.bands.get(id.0).map(|band| (*id, band)))
    }

    /// Musicians currently displayed, in display order.
    pub fn displayed_musicians(&self) -> &[MusicianId] {
        &self.displayed_musicians
    }

    /// Bands currently displayed, in display order.
    pub fn displayed_bands(&self) -> &[BandId] {
        &self.displayed_bands
    }

    /// Resolve a displayed position to a musician.
    pub fn musician_at(&self, index: Index) -> Option<(MusicianId, &Musician)> {
        let id = *self.displayed_musicians.get(index.zero_based())?;
        self.musician(id).map(|musician| (id, musician))
    }

    /// Resolve a displayed position to a band.
    pub fn band_at(&self, index: Index) -> Option<(BandId, &Band)> {
        let id = *self.displayed_bands.get(index.zero_based())?;
        self.band(id).map(|band| (id, band))
    }

    pub fn has_musician(&self, candidate: &Musician) -> bool {
        self.musicians
            .iter()
            .any(|(_, existing)| existing.is_same_musician(candidate))
    }

    pub fn has_band(&self, candidate: &Band) -> bool {
        self.bands
            .iter()
            .any(|(_, existing)| existing.is_same_band(candidate))
    }

    /// Insert a musician, rejecting a name that is already taken.
    pub fn add_musician(&mut self, musician: Musician) -> Result<MusicianId, DomainError> {
        if self.has_musician(&musician) {
            return Err(DomainError::DuplicateMusician(musician.name.to_string()));
        }
        let id = MusicianId(self.musicians.insert(musician));
        self.musician_order.push(id);
        self.refresh_views();
        Ok(id)
    }

    /// Insert a band. Every listed member must already be in the roster.
    pub fn add_band(&mut self, band: Band) -> Result<BandId, DomainError> {
        if self.has_band(&band) {
            return Err(DomainError::DuplicateBand(band.name.to_string()));
        }
        if band
            .members
            .iter()
            .any(|member| !self.musicians.contains(member.0))
        {
            return Err(DomainError::UnknownMusician);
        }
        let id = BandId(self.bands.insert(band));
        self.band_order.push(id);
        self.refresh_views();
        Ok(id)
    }

    /// Remove a musician and drop it from every band it belonged to.
    pub fn remove_musician(&mut self, id: MusicianId) -> Result<Musician, DomainError> {
        let musician = self
            .musicians
            .try_remove(id.0)
            .ok_or(DomainError::UnknownMusician)?;
        self.musician_order.retain(|existing| *existing != id);
        for (_, band) in self.bands.iter_mut() {
            band.members.remove(&id);
        }
        self.refresh_views();
        Ok(musician)
    }

    pub fn remove_band(&mut self, id: BandId) -> Result<Band, DomainError> {
        let band = self.bands.try_remove(id.0).ok_or(DomainError::UnknownBand)?;
        self.band_order.retain(|existing| *existing != id);
        self.refresh_views();
        Ok(band)
    }

    /// Whether `musician` is a member of `band`. Fails on identities unknown to the roster.
    pub fn has_musician_in_band(
        &self,
        band: BandId,
        musician: MusicianId,
    ) -> Result<bool, DomainError> {
        let band = self.band(band).ok_or(DomainError::UnknownBand)?;
        if !self.musicians.contains(musician.0) {
            return Err(DomainError::UnknownMusician);
        }
        Ok(band.has_member(musician))
    }

    /// Record `musician` as a member of `band`.
    pub fn add_musician_to_band(
        &mut self,
        band: BandId,
        musician: MusicianId,
    ) -> Result<(), DomainError> {
        if self.has_musician_in_band(band, musician)? {
            return Err(DomainError::AlreadyMember);
        }
        let entry = self.bands.get_mut(band.0).ok_or(DomainError::UnknownBand)?;
        entry.members.insert(musician);
        self.refresh_views();
        Ok(())
    }

    pub fn remove_musician_from_band(
        &mut self,
        band: BandId,
        musician: MusicianId,
    ) -> Result<(), DomainError> {
        if !self.has_musician_in_band(band, musician)? {
            return Err(DomainError::NotMember);
        }
        let entry = self.bands.get_mut(band.0).ok_or(DomainError::UnknownBand)?;
        entry.members.remove(&musician);
        self.refresh_views();
        Ok(())
    }

    /// Members of `band` in roster insertion order.
    pub fn members_of(&self, band: BandId) -> Vec<MusicianId> {
        let Some(band) = self.band(band) else {
            return Vec::new();
        };
        self.musician_order
            .iter()
            .copied()
            .filter(|id| band.has_member(*id))
            .collect()
    }

    pub fn musician_view(&self) -> &MusicianView {
        &self.musician_view
    }

    pub fn band_view(&self) -> &BandView {
        &self.band_view
    }

    /// Display every band and musician.
    pub fn show_all(&mut self) {
        self.musician_view = MusicianView::All;
        self.band_view = BandView::All;
        self.refresh_views();
    }

    pub fn set_musician_view(&mut self, view: MusicianView) {
        self.musician_view = view;
        self.refresh_views();
    }

    pub fn set_band_view(&mut self, view: BandView) {
        self.band_view = view;
        self.refresh_views();
    }

    /// Remove every band and musician and reset the views.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn refresh_views(&mut self) {
        self.displayed_bands = self
            .bands()
            .filter(|(_, band)| match &self.band_view {
                BandView::All => true,
                BandView::NameKeywords(keywords) => {
                    keywords.iter().any(|keyword| band.name.contains_word(keyword))
                }
            })
            .map(|(id, _)| id)
            .collect();

        self.displayed_musicians = self
            .musicians()
            .filter(|(id, musician)| match &self.musician_view {
                MusicianView::All => true,
                MusicianView::NameKeywords(keywords) => keywords
                    .iter()
                    .any(|keyword| musician.name.contains_word(keyword)),
                MusicianView::MembersOfDisplayedBands => self
                    .displayed_bands
                    .iter()
                    .filter_map(|band| self.bands.get(band.0))
                    .any(|band| band.has_member(*id)),
            })
            .map(|(id, _)| id)
            .collect();
    }
}
