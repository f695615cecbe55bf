//! # Cache de Modelos
//!
//! Guarda um motor por identificador de modelo, construído na primeira vez
//! que é pedido e reutilizado por todas as requisições seguintes.
//!
//! Cada identificador tem a sua própria célula de inicialização: chamadas
//! concorrentes ao mesmo modelo esperam uma única construção, enquanto
//! modelos diferentes carregam em paralelo. O mutex protege apenas o mapa
//! de células e nunca é mantido durante uma construção. Falhas não ficam
//! registradas: a célula vazia sai do mapa e o próximo pedido tenta de novo.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use std::time::Instant;

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::engine::{Engine, ModelLoader};
use crate::error::Result;

type Slot = Arc<OnceCell<Arc<dyn Engine>>>;

pub struct ModelCache {
    loader: Box<dyn ModelLoader>,
    slots: Mutex<HashMap<String, Slot>>,
}

impl ModelCache {
    pub fn new(loader: impl ModelLoader + 'static) -> Self {
        Self { loader: Box::new(loader), slots: Mutex::new(HashMap::new()) }
    }

    fn slot(&self, model: &str) -> Slot {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.entry(model.to_string()).or_default().clone()
    }

    /// Devolve o motor do modelo, construindo-o se necessário.
    ///
    /// Bloqueia durante a construção; chame a partir do pool bloqueante.
    pub fn get(&self, model: &str) -> Result<Arc<dyn Engine>> {
        let slot = self.slot(model);
        let engine = slot.get_or_try_init(|| {
            info!(model, "carregando modelo");
            let start = Instant::now();
            match self.loader.load(model) {
                Ok(engine) => {
                    info!(model, elapsed_ms = start.elapsed().as_millis() as u64, "modelo carregado");
                    Ok(engine)
                }
                Err(e) => {
                    error!(model, error = %e, "falha ao carregar modelo");
                    Err(e)
                }
            }
        });
        match engine {
            Ok(engine) => Ok(engine.clone()),
            Err(e) => {
                self.forget(model, &slot);
                Err(e)
            }
        }
    }

    /// Remove a célula de `model` se ela ainda for `slot` e continuar vazia.
    fn forget(&self, model: &str, slot: &Slot) {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let stale = slots
            .get(model)
            .map(|current| Arc::ptr_eq(current, slot) && current.get().is_none())
            .unwrap_or(false);
        if stale {
            slots.remove(model);
        }
    }

    /// Carrega os modelos em ordem, parando no primeiro erro.
    pub fn preload<I, S>(&self, models: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for model in models {
            self.get(model.as_ref())?;
        }
        Ok(())
    }

    /// Identificadores dos modelos já construídos, em ordem.
    pub fn loaded(&self) -> Vec<String> {
        let slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut out: Vec<String> = slots
            .iter()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(model, _)| model.clone())
            .collect();
        out.sort();
        out
    }

    /// Modelos que o carregador anuncia mais os já carregados, sem repetição.
    pub fn available(&self) -> Vec<String> {
        let mut all: BTreeSet<String> = self.loader.available().into_iter().collect();
        all.extend(self.loaded());
        all.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BuiltinLoader;
    use crate::error::NlpError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    /// Conta as construções e demora um pouco em cada uma.
    struct CountingLoader {
        loads: Arc<AtomicUsize>,
    }

    impl ModelLoader for CountingLoader {
        fn available(&self) -> Vec<String> {
            vec!["en".to_string()]
        }

        fn load(&self, model: &str) -> Result<Arc<dyn Engine>> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(50));
            BuiltinLoader.load(model)
        }
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let loads = Arc::new(AtomicUsize::new(0));
        let cache = ModelCache::new(CountingLoader { loads: loads.clone() });

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let engine = cache.get("en").expect("modelo");
                    assert_eq!(engine.name(), "en");
                });
            }
        });

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert_eq!(cache.loaded(), vec!["en"]);
    }

    #[test]
    fn test_same_handle_is_returned() {
        let cache = ModelCache::new(BuiltinLoader);
        let a = cache.get("pt").expect("modelo");
        let b = cache.get("pt").expect("modelo");
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = ModelCache::new(BuiltinLoader);
        assert!(matches!(cache.get("xx"), Err(NlpError::UnknownModel(_))));
        assert!(cache.get("xx").is_err());
        assert!(cache.loaded().is_empty());
    }

    #[test]
    fn test_failed_ids_leave_no_slots() {
        let cache = ModelCache::new(BuiltinLoader);
        for i in 0..100 {
            assert!(cache.get(&format!("bogus-{i}")).is_err());
        }
        cache.get("en").expect("modelo");
        assert_eq!(cache.slots.lock().expect("mapa").len(), 1);
        assert_eq!(cache.available(), vec!["de", "en", "pt"]);
    }

    #[test]
    fn test_preload_and_available() {
        let cache = ModelCache::new(BuiltinLoader);
        assert!(cache.loaded().is_empty());
        cache.preload(["en", "de"]).expect("preload");
        assert_eq!(cache.loaded(), vec!["de", "en"]);
        assert_eq!(cache.available(), vec!["de", "en", "pt"]);
        assert!(cache.preload(["pt", "xx"]).is_err());
        assert_eq!(cache.loaded(), vec!["de", "en", "pt"]);
    }
}
