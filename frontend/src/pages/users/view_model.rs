use super::repository::UsersRepository;
use super::utils::{filter_users, UserFormState, ValidationPolicy};
use crate::api::{ApiClient, ApiError, User, UserPayload};
use crate::components::messages::MessageState;
use crate::utils::pagination;
use leptos::*;
use std::rc::Rc;

pub const USERS_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserModal {
    Create,
    Edit(i64),
}

#[derive(Clone, Copy)]
pub struct UsersViewModel {
    pub policy: ValidationPolicy,
    pub users: RwSignal<Vec<User>>,
    pub search: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub modal: RwSignal<Option<UserModal>>,
    pub form: RwSignal<UserFormState>,
    pub delete_target: RwSignal<Option<User>>,
    pub message: RwSignal<MessageState>,
    pub save_action: Action<(Option<i64>, UserPayload), Result<User, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    loader: Resource<(), Result<Vec<User>, ApiError>>,
}

/// Local reconciliation after a confirmed create; the list is not
/// refetched.
pub fn apply_created(users: &mut Vec<User>, user: User) {
    users.push(user);
}

pub fn apply_updated(users: &mut Vec<User>, user: User) {
    if let Some(slot) = users.iter_mut().find(|u| u.id == user.id) {
        *slot = user;
    }
}

pub fn apply_deleted(users: &mut Vec<User>, id: i64) {
    users.retain(|u| u.id != id);
}

pub fn use_users_view_model(policy: ValidationPolicy) -> UsersViewModel {
    let client = Rc::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new));
    let repo = UsersRepository::new_with_client(client);

    // the list is reconciled locally after each confirmed mutation,
    // so it is fetched exactly once
    let loader = create_local_resource(|| (), {
        let repo = repo.clone();
        move |_| {
            let repo = repo.clone();
            async move { repo.list().await }
        }
    });

    let users = create_rw_signal(Vec::<User>::new());
    let search = create_rw_signal(String::new());
    let page = create_rw_signal(1usize);
    let modal = create_rw_signal(None::<UserModal>);
    let form = create_rw_signal(UserFormState::default());
    let delete_target = create_rw_signal(None::<User>);
    let message = create_rw_signal(MessageState::default());

    let save_action = create_action({
        let repo = repo.clone();
        move |input: &(Option<i64>, UserPayload)| {
            let repo = repo.clone();
            let (id, payload) = input.clone();
            async move {
                match id {
                    Some(id) => repo.update(id, &payload).await,
                    None => repo.create(&payload).await,
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
            users.set(list);
        }
    });

    // a new search always lands back on page 1
    create_effect(move |_| {
        let _ = search.get();
        page.set(1);
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(user) => {
                    let editing = matches!(modal.get_untracked(), Some(UserModal::Edit(_)));
                    users.update(|list| {
                        if editing {
                            apply_updated(list, user);
                        } else {
                            apply_created(list, user);
                        }
                    });
                    message.update(|m| {
                        m.set_success(if editing {
                            "Utilisateur mis à jour."
                        } else {
                            "Utilisateur ajouté."
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
                    if let Some(user) = delete_target.get_untracked() {
                        users.update(|list| apply_deleted(list, user.id));
                    }
                    message.update(|m| m.set_success("Utilisateur supprimé."));
                }
                Err(err) => message.update(|m| m.set_error(err)),
            }
            delete_target.set(None);
        }
    });

    UsersViewModel {
        policy,
        users,
        search,
        page,
        modal,
        form,
        delete_target,
        message,
        save_action,
        delete_action,
        loader,
    }
}

impl UsersViewModel {
    pub fn filtered_users(&self) -> Signal<Vec<User>> {
        let vm = *self;
        Signal::derive(move || filter_users(&vm.users.get(), &vm.search.get()))
    }

    pub fn page_count(&self) -> Signal<usize> {
        let filtered = self.filtered_users();
        Signal::derive(move || pagination::page_count(filtered.get().len(), USERS_PAGE_SIZE))
    }

    pub fn visible_users(&self) -> Signal<Vec<User>> {
        let filtered = self.filtered_users();
        let page = self.page;
        Signal::derive(move || {
            pagination::paginate(&filtered.get(), USERS_PAGE_SIZE, page.get()).to_vec()
        })
    }

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
        self.form.set(UserFormState::default());
        self.modal.set(Some(UserModal::Create));
    }

    pub fn open_edit(&self, user: &User) {
        self.form.set(UserFormState::from_user(user));
        self.modal.set(Some(UserModal::Edit(user.id)));
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
        let form = self.form.get_untracked();
        if let Err(err) = form.validate(self.policy) {
            self.message.update(|m| m.set_error(err));
            return;
        }
        let id = match modal {
            UserModal::Create => None,
            UserModal::Edit(id) => Some(id),
        };
        self.save_action.dispatch((id, form.to_payload()));
    }

    pub fn request_delete(&self, user: User) {
        self.delete_target.set(Some(user));
    }

    pub fn cancel_delete(&self) {
        self.delete_target.set(None);
    }

    pub fn confirm_delete(&self) {
        if self.is_busy() {
            return;
        }
        if let Some(user) = self.delete_target.get_untracked() {
            self.delete_action.dispatch(user.id);
        }
    }
}
