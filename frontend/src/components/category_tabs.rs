use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub tabs: Vec<&'static str>,
    pub selected: AttrValue,
    pub on_select: Callback<&'static str>,
}

#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    html! {
        <div class="tabs" role="tablist">
            {
                for props.tabs.iter().map(|&tab| {
                    let active = props.selected.as_str() == tab;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(tab))
                    };
                    html! {
                        <button
                            class={classes!("tab", active.then_some("active"))}
                            role="tab"
                            aria-selected={active.to_string()}
                            {onclick}
                        >
                            { tab }
                        </button>
                    }
                })
            }
        </div>
    }
}
