// ============================================================================
// CAROUSEL - máquina de estados del rotador (índice + fase + timer único)
// ============================================================================
// El timer vive en el hook que posee este estado; acá solo se modela la
// transición de índice para que sea testeable sin navegador.
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CarouselPhase {
    /// Secuencia de 0 o 1 elementos: no hay nada que rotar
    Idle,
    Auto,
    Paused,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Carousel {
    index: usize,
    len: usize,
    phase: CarouselPhase,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            index: 0,
            len,
            phase: if len > 1 {
                CarouselPhase::Auto
            } else {
                CarouselPhase::Idle
            },
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    /// Avanza un paso módulo len en cada tick del timer. En pausa no avanza.
    pub fn tick(&mut self) {
        if self.phase == CarouselPhase::Auto && self.len > 1 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn pause(&mut self) {
        if self.phase == CarouselPhase::Auto {
            self.phase = CarouselPhase::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.phase == CarouselPhase::Paused {
            self.phase = CarouselPhase::Auto;
        }
    }

    /// Salto manual (click en un dot). Índices fuera de rango se ignoran.
    /// El hook que posee el timer debe re-armarlo tras un salto.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    /// La secuencia cambió de largo (ej. item-count responsivo):
    /// el índice se recorta al rango válido, nunca queda fuera.
    pub fn resize(&mut self, new_len: usize) {
        self.len = new_len;
        if new_len == 0 {
            self.index = 0;
        } else if self.index >= new_len {
            self.index = new_len - 1;
        }
        self.phase = match (new_len > 1, self.phase) {
            (false, _) => CarouselPhase::Idle,
            (true, CarouselPhase::Idle) => CarouselPhase::Auto,
            (true, other) => other,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_ticks_land_on_k_mod_n() {
        let mut c = Carousel::new(4);
        for _ in 0..11 {
            c.tick();
        }
        assert_eq!(c.index(), 11 % 4);
    }

    #[test]
    fn paused_carousel_does_not_advance() {
        let mut c = Carousel::new(3);
        c.tick();
        c.pause();
        c.tick();
        c.tick();
        assert_eq!(c.index(), 1);

        c.resume();
        c.tick();
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn manual_jump_sets_index_and_ignores_out_of_bounds() {
        let mut c = Carousel::new(5);
        c.jump_to(3);
        assert_eq!(c.index(), 3);

        c.jump_to(9);
        assert_eq!(c.index(), 3);

        c.tick();
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn resize_clamps_the_index_into_range() {
        let mut c = Carousel::new(6);
        c.jump_to(5);

        c.resize(3);
        assert_eq!(c.index(), 2);
        assert_eq!(c.len(), 3);

        c.resize(0);
        assert_eq!(c.index(), 0);
        assert_eq!(c.phase(), CarouselPhase::Idle);
    }

    #[test]
    fn single_item_sequence_stays_idle() {
        let mut c = Carousel::new(1);
        assert_eq!(c.phase(), CarouselPhase::Idle);
        c.tick();
        assert_eq!(c.index(), 0);

        // Al crecer la secuencia vuelve a rotar
        c.resize(4);
        assert_eq!(c.phase(), CarouselPhase::Auto);
        c.tick();
        assert_eq!(c.index(), 1);
    }
}
