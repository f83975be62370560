use super::repository::MotifsRepository;
use crate::api::{ApiClient, ApiError, Motif, MotifPayload};
use crate::components::messages::MessageState;
use leptos::*;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotifModal {
    Create,
    Edit(i64),
}

#[derive(Clone, Copy)]
pub struct MotifsViewModel {
    pub motifs: RwSignal<Vec<Motif>>,
    pub modal: RwSignal<Option<MotifModal>>,
    pub name: RwSignal<String>,
    pub delete_target: RwSignal<Option<Motif>>,
    pub message: RwSignal<MessageState>,
    pub save_action: Action<(Option<i64>, MotifPayload), Result<MotifSaved, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    loader: Resource<(), Result<Vec<Motif>, ApiError>>,
}

/// Confirmed outcome of a save. Rename confirmations carry no body, so
/// the action threads the dispatched name through; reconciliation must
/// never read the live form, which may have changed while the request
/// was in flight.
#[derive(Debug, Clone, PartialEq)]
pub enum MotifSaved {
    Created(Motif),
    Renamed { id: i64, name: String },
}

pub fn apply_saved(motifs: &mut Vec<Motif>, saved: &MotifSaved) {
    match saved {
        MotifSaved::Created(motif) => motifs.push(motif.clone()),
        MotifSaved::Renamed { id, name } => {
            if let Some(slot) = motifs.iter_mut().find(|m| m.id == *id) {
                slot.motif_name = name.clone();
            }
        }
    }
}

pub fn apply_deleted(motifs: &mut Vec<Motif>, id: i64) {
    motifs.retain(|m| m.id != id);
}

pub fn use_motifs_view_model() -> MotifsViewModel {
    let client = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let repo = MotifsRepository::new_with_client(client);

    // the list is reconciled locally after each confirmed mutation,
    // so it is fetched exactly once
    let loader = create_local_resource(|| (), {
        let repo = repo.clone();
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        }
    });

    let motifs = create_rw_signal(Vec::<Motif>::new());
    let modal = create_rw_signal(None::<MotifModal>);
    let name = create_rw_signal(String::new());
    let delete_target = create_rw_signal(None::<Motif>);
    let message = create_rw_signal(MessageState::default());

    let save_action = create_action({
        let repo = repo.clone();
        move |input: &(Option<i64>, MotifPayload)| {
            let repo = repo.clone();
            let (id, payload) = input.clone();
            async move {
                match id {
                    Some(id) => {
                        repo.rename(id, &payload).await?;
                        Ok(MotifSaved::Renamed {
                            id,
                            name: payload.motif_name,
                        })
                    }
                    None => repo.create(&payload).await.map(MotifSaved::Created),
                }
            }
        }
    });

    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete(id).await }
    });

    create_effect(move |_| {
        if let Some(Ok(list)) = loader.get() {
            motifs.set(list);
        }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(saved) => {
                    let created = matches!(saved, MotifSaved::Created(_));
                    motifs.update(|list| apply_saved(list, &saved));
                    message.update(|m| {
                        m.set_success(if created {
                            "Motif ajouté."
                        } else {
                            "Motif mis à jour."
                        })
                    });
                    modal.set(None);
                }
                Err(err) => message.update(|m| m.set_error(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    if let Some(motif) = delete_target.get_untracked() {
                        motifs.update(|list| apply_deleted(list, motif.id));
                    }
                    message.update(|m| m.set_success("Motif supprimé."));
                }
                Err(err) => message.update(|m| m.set_error(err)),
            }
            delete_target.set(None);
        }
    });

    MotifsViewModel {
        motifs,
        modal,
        name,
        delete_target,
        message,
        save_action,
        delete_action,
        loader,
    }
}

impl MotifsViewModel {
    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let loader = self.loader;
        Signal::derive(move || loader.get().and_then(Result::err))
    }

    pub fn loading(&self) -> Signal<bool> {
        let loader = self.loader;
        Signal::derive(move || loader.loading().get())
    }

    pub fn busy(&self) -> Signal<bool> {
        let save = self.save_action.pending();
        let delete = self.delete_action.pending();
        Signal::derive(move || save.get() || delete.get())
    }

    fn is_busy(&self) -> bool {
        self.save_action.pending().get_untracked()
            || self.delete_action.pending().get_untracked()
    }

    pub fn open_create(&self) {
        self.name.set(String::new());
        self.modal.set(Some(MotifModal::Create));
    }

    pub fn open_edit(&self, motif: &Motif) {
        self.name.set(motif.motif_name.clone());
        self.modal.set(Some(MotifModal::Edit(motif.id)));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    pub fn submit(&self) {
        if self.is_busy() {
            return;
        }
        let Some(modal) = self.modal.get_untracked() else {
            return;
        };
        let name = self.name.get_untracked();
        if name.trim().is_empty() {
            self.message.update(|m| {
                m.set_error(ApiError::validation("Le nom du motif est obligatoire."))
            });
            return;
        }
        let id = match modal {
            MotifModal::Create => None,
            MotifModal::Edit(id) => Some(id),
        };
        self.save_action.dispatch((
            id,
            MotifPayload {
                motif_name: name.trim().to_string(),
            },
        ));
    }

    pub fn request_delete(&self, motif: Motif) {
        self.delete_target.set(Some(motif));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.is_busy() {
            return;
        }
        if let Some(motif) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(motif.id);
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn blank_name_is_rejected_before_any_request() {
        with_runtime(|| {
            let vm = use_motifs_view_model();
            vm.open_create();
            vm.name.set("   ".into());
            vm.submit();
            let error = vm.message.get().error.unwrap();
            assert!(error.is_validation());
            assert!(vm.save_action.value().get().is_none());
        });
    }

    #[test]
    fn edit_prefills_the_name() {
        with_runtime(|| {
            let vm = use_motifs_view_model();
            vm.open_edit(&Motif {
                id: 3,
                motif_name: "Maladie".into(),
            });
            assert_eq!(vm.modal.get(), Some(MotifModal::Edit(3)));
            assert_eq!(vm.name.get(), "Maladie");
        });
    }
}
