use yew::prelude::*;
use super::footer::Footer;
use super::navbar::Navbar;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar />
            <main class="flex-1 w-full max-w-6xl mx-auto p-6">
                { for props.children.iter() }
            </main>
            <Footer />
        </div>
    }
}
