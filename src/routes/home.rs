//! Protected landing page: hero, speciality shortcuts and the featured
//! doctor grid. The content is static for now; booking itself is served by
//! another surface.

use crate::components::AppShell;
use leptos::prelude::*;

const SPECIALITIES: &[&str] = &[
    "General physician",
    "Gynecologist",
    "Dermatologist",
    "Pediatrician",
    "Neurologist",
    "Gastroenterologist",
];

/// The catalogue is not wired to an API yet; the grid repeats a fixed card.
const FEATURED_DOCTORS: usize = 10;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="bg-[#4285f4] rounded-lg px-6 py-10 md:px-10 md:py-16 text-white">
                <h1 class="text-3xl md:text-4xl font-semibold leading-tight">
                    "Book Appointment" <br /> "With Trusted Doctors"
                </h1>
                <p class="mt-4 text-sm md:text-base text-blue-100 max-w-xl">
                    "Simply browse through our extensive list of trusted doctors, "
                    "schedule your appointment hassle-free."
                </p>
                <a
                    href="#specialities"
                    class="inline-block mt-6 bg-white text-gray-700 text-sm rounded-full px-6 py-3 hover:scale-105 transition-transform"
                >
                    "Book appointment"
                </a>
            </section>

            <section id="specialities" class="mt-12 text-center">
                <h2 class="text-2xl font-medium text-gray-900">"Find by Speciality"</h2>
                <p class="mt-2 text-sm text-gray-500 max-w-md mx-auto">
                    "Simply browse through our extensive list of trusted doctors, "
                    "schedule your appointment hassle-free."
                </p>
                <div class="mt-6 flex flex-wrap justify-center gap-6">
                    {SPECIALITIES
                        .iter()
                        .map(|title| {
                            view! {
                                <div class="flex flex-col items-center gap-2 text-xs cursor-pointer hover:-translate-y-1 transition-transform">
                                    <div class="w-16 h-16 rounded-full bg-blue-50 flex items-center justify-center text-[#4285f4] font-semibold">
                                        {title.chars().next().map(String::from)}
                                    </div>
                                    <p class="text-gray-700">{*title}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mt-12 text-center">
                <h2 class="text-2xl font-medium text-gray-900">"Top Doctors to Book"</h2>
                <p class="mt-2 text-sm text-gray-500 max-w-md mx-auto">
                    "Simply browse through our extensive list of trusted doctors."
                </p>
                <div class="mt-6 grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-5 gap-4">
                    {(0..FEATURED_DOCTORS)
                        .map(|_| {
                            view! {
                                <div class="border border-blue-100 rounded-xl overflow-hidden text-left cursor-pointer hover:-translate-y-2 transition-transform">
                                    <div class="bg-blue-50 h-32 flex items-end justify-center text-5xl text-[#4285f4]">
                                        "\u{1F468}\u{200D}\u{2695}\u{FE0F}"
                                    </div>
                                    <div class="p-4">
                                        <div class="flex items-center gap-2 text-xs text-green-500">
                                            <span class="w-2 h-2 bg-green-500 rounded-full"></span>
                                            "Available"
                                        </div>
                                        <p class="mt-1 text-gray-900 font-medium">"Dr. Richard James"</p>
                                        <p class="text-xs text-gray-500">"General physician"</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>

            <section class="mt-12 mb-8 bg-[#4285f4] rounded-lg px-6 py-10 md:px-10 text-white flex flex-col items-start">
                <h2 class="text-2xl md:text-3xl font-semibold leading-tight">
                    "Book Appointment" <br /> "With 100+ Trusted Doctors"
                </h2>
                <a
                    href="#specialities"
                    class="inline-block mt-6 bg-white text-gray-700 text-sm rounded-full px-6 py-3 hover:scale-105 transition-transform"
                >
                    "Explore doctors"
                </a>
            </section>
        </AppShell>
    }
}
